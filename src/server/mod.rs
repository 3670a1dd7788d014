//! HTTP surface: serves the page, the radar chart data, the resume download,
//! per-project redirects and contact form submissions.

mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ErrorResponse;
pub use router::create_router;
pub use state::AppState;

use crate::utils::error::Result;
use std::net::SocketAddr;

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🌐 Portfolio listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
