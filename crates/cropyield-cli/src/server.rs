//! Server setup and lifecycle management

use crate::api::create_router;
use crate::config::ServerConfig;
use crate::context::AppContext;
use crate::error::{CliError, CliResult};
use tokio::net::TcpListener;
use tracing::{error, info};

/// HTTP server for the predict-and-sweep form
pub struct Server {
    config: ServerConfig,
    ctx: AppContext,
}

impl Server {
    pub fn new(config: ServerConfig, ctx: AppContext) -> Self {
        Self { config, ctx }
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> CliResult<()> {
        let addr = self.config.listen_addr;
        let app = create_router(self.ctx);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CliError::Server(format!("failed to bind {}: {}", addr, e)))?;

        info!("cropyield listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        info!("cropyield shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
