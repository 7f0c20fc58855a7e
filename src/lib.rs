// Public API for integration tests and library usage

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod protocol;
pub mod shuffle;
pub mod state;
pub mod types;
pub mod ws;

// Snapshot fan-out to connected clients
pub mod broadcast;
