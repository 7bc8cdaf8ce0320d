//! Tracing subscriber setup shared by every Roomie binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise `crate_name` and `tower_http` are
/// logged at `default_level`.
///
/// # Arguments
///
/// * `crate_name` - Binary or crate name (dashes are converted to underscores)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"debug"`)
pub fn setup_logger(crate_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(crate_name, default_level)));

    // A second initialization (e.g. from tests) keeps the first subscriber.
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(true)
        .try_init()
    {
        tracing::debug!("Logger already initialized for '{}': {}", crate_name, e);
    }
}

fn default_directives(crate_name: &str, default_level: &str) -> String {
    let target = crate_name.replace('-', "_");
    format!("{target}={default_level},roomie_server={default_level},tower_http={default_level}")
}
