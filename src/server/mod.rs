mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::dataset::Dataset;
use crate::error::Result;

pub use routes::{router, TableQuery};

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8050";

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8050)),
        }
    }
}

/// Serve the page until Ctrl-C.
pub async fn serve(config: ServerConfig, dataset: Arc<Dataset>) -> Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        foods = dataset.len(),
        "serving food weight page"
    );

    axum::serve(listener, router(dataset))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
    }
}
