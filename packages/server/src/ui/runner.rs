//! Server startup.

use std::{future::Future, sync::Arc};

use tokio::net::TcpListener;

use super::{config::ServerConfig, router::build_router, signal::shutdown_signal, state::AppState};

/// Bind the configured address and serve until Ctrl-C / SIGTERM
pub async fn run(config: ServerConfig) -> Result<(), std::io::Error> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let state = Arc::new(AppState::new_in_memory());
    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
