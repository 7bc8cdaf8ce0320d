//! Roomie presence and messaging server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomie-server -- --port 8080
//! ```

use clap::Parser;
use roomie_server::ServerConfig;
use roomie_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = roomie_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
