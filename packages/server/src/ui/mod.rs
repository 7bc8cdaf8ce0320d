//! UI 層: HTTP / WebSocket の入口

pub mod config;
pub mod error;
pub mod extract;
mod handler;
pub mod router;
mod runner;
mod signal;
pub mod state;

pub use config::ServerConfig;
pub use runner::{run, serve};
