//! Server startup and shutdown.

use tokio::net::TcpListener;

use crate::config::FolioConfig;
use crate::error::{Error, Result};
use crate::routes::build_router;
use crate::state::AppState;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &FolioConfig) -> Result<()> {
    let state = AppState::new(config)?;
    let router = build_router(state.clone());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        addr = %addr,
        base_path = %state.base_path(),
        asset_dir = %state.asset_dir().display(),
        projects = state.renderer().registry().len(),
        "folio listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;

    tracing::info!("folio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
