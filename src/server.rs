//! HTTP server lifecycle: bind, serve, shut down.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::metrics;
use crate::utils::shutdown_signal;

/// Bind to the configured address and serve until a shutdown signal arrives.
pub async fn serve(config: &Config) -> Result<()> {
    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr()? {
        metrics::install_exporter(addr)?;
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    info!("Reporting environment from ${}", config.environment_var);

    serve_listener(
        listener,
        AppState::new(config.environment_var.as_str()),
        shutdown_signal(),
    )
    .await
}

/// Serve on an already bound listener until `shutdown` resolves.
/// In-flight requests are drained before returning.
pub async fn serve_listener<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
