//! Server configuration from environment variables.

use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 6573;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_EXPORT_TITLE: &str = "bingo_results";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    /// Fixed draw seed for rehearsals; None draws from OS entropy
    pub seed: Option<u64>,
    pub export_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            seed: None,
            export_title: DEFAULT_EXPORT_TITLE.to_string(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl ServerConfig {
    /// Load config from environment variables.
    ///
    /// PRIZEDRAW_PORT, PRIZEDRAW_STATIC_DIR, PRIZEDRAW_SEED and
    /// PRIZEDRAW_EXPORT_TITLE are all optional; unparsable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match non_empty_var("PRIZEDRAW_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PRIZEDRAW_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let seed = non_empty_var("PRIZEDRAW_SEED").and_then(|raw| match raw.parse() {
            Ok(seed) => {
                tracing::warn!(
                    "PRIZEDRAW_SEED is set - number assignment is reproducible, do not use for a live draw"
                );
                Some(seed)
            }
            Err(_) => {
                tracing::warn!("Invalid PRIZEDRAW_SEED '{}', ignoring", raw);
                None
            }
        });

        Self {
            port,
            static_dir: non_empty_var("PRIZEDRAW_STATIC_DIR").unwrap_or(defaults.static_dir),
            seed,
            export_title: non_empty_var("PRIZEDRAW_EXPORT_TITLE").unwrap_or(defaults.export_title),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
