//! Roomie server library.
//!
//! Presence registry and real-time relay over WebSocket, plus the REST API
//! for profiles, conversations and stored messages.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::{ServerConfig, run};
