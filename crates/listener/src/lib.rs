//! HTTP boundary for pipeline inspection.
//!
//! Exposes the inspection core over HTTP:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/` | liveness probe, constant `{"Ping": "Pong"}` |
//! | `POST` | `/pipelines/parse` | decode a pipeline, return `num_nodes`, `num_edges`, `is_dag` |
//!
//! Cross-origin requests are unrestricted: any origin, method and header,
//! with credentials allowed.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Transport details, wire schemas and error rendering
//! live here. The [`pipeline`] crate sees only [`pipeline::Pipeline`] and
//! returns [`pipeline::PipelineSummary`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod schema;

use std::future::Future;
use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ListenerConfig;
pub use error::{ApiError, ListenerError};

/// Builds the application router.
pub fn router(config: &ListenerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/pipelines/parse", post(handlers::parse_pipeline))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
        // Mirrors the request origin so credentials can be allowed for any origin.
        .layer(CorsLayer::very_permissive())
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ListenerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })
}

/// Serves the router on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ListenerConfig,
    shutdown: F,
) -> Result<(), ListenerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ListenerError::Serve)?;
    tracing::info!(%local_addr, "listening");

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ListenerError::Serve)?;

    tracing::info!("listener stopped");
    Ok(())
}
