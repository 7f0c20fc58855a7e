pub mod export;
pub mod ordering;
mod registry;
mod stage;

pub use registry::PrizeRegistry;
pub use stage::StageController;

use crate::protocol::ServerMessage;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Shared application state.
///
/// The controller sits behind a single `RwLock`, so every mutation is applied
/// by one exclusive writer in arrival order.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<RwLock<StageController<StdRng>>>,
    /// Title used for CSV export filenames
    pub export_title: String,
    /// Broadcast channel for all connected clients (public board)
    pub broadcast: broadcast::Sender<ServerMessage>,
    /// Broadcast channel for operator clients (full host state)
    pub host_broadcast: broadcast::Sender<ServerMessage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_controller(StageController::from_entropy())
    }

    /// State with a seeded draw, for rehearsals and tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_controller(StageController::with_seed(seed))
    }

    pub fn with_controller(controller: StageController<StdRng>) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        let (host_tx, _host_rx) = broadcast::channel(100);
        Self {
            controller: Arc::new(RwLock::new(controller)),
            export_title: "bingo_results".to_string(),
            broadcast: tx,
            host_broadcast: host_tx,
        }
    }

    pub fn with_export_title(mut self, title: impl Into<String>) -> Self {
        self.export_title = title.into();
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
