//! Server startup and graceful shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::routes;

/// Binds the configured address and serves the catalog until ctrl-c or
/// SIGTERM.
pub async fn run(config: CatalogConfig, catalog: Catalog) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    let catalog = Arc::new(catalog);
    let app = routes::app(&config, Arc::clone(&catalog))?;

    info!(
        addr = %addr,
        projects = catalog.len(),
        origin = %config.cors.allowed_origin,
        "Catalog service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalog service shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT"),
        () = terminate => info!("received SIGTERM"),
    }
}
