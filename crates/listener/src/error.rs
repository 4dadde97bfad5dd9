//! Error types for the HTTP boundary.
//!
//! [`ApiError`] covers per-request failures and knows how to render itself as
//! an HTTP response. [`ListenerError`] covers failures of the server itself
//! (binding, accept loop) and is returned to the composition root.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use pipeline::PipelineError;

use crate::schema::ErrorBody;

// ---------------------------------------------------------------------------
// Request-level errors
// ---------------------------------------------------------------------------

/// A request that could not be answered with a summary.
///
/// Both variants are client errors; neither is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was well-formed but an edge refers to an undeclared node.
    #[error(transparent)]
    InvalidPipeline(#[from] PipelineError),

    /// The body could not be decoded into a pipeline request (bad JSON,
    /// wrong shape, missing fields, or wrong content type).
    #[error("{}", .0.body_text())]
    MalformedRequest(#[from] JsonRejection),
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPipeline(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedRequest(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(status = status.as_u16(), error = %self, "request rejected");
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Server-level errors
// ---------------------------------------------------------------------------

/// Failures of the HTTP server itself.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to bind.
        addr: SocketAddr,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}
