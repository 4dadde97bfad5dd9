//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use pipeline::{Pipeline, PipelineSummary, RequestId};

use crate::error::ApiError;
use crate::schema::{PingResponse, PipelineRequest};

/// `GET /`: liveness probe.
pub async fn root() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

/// `POST /pipelines/parse`: summarise a submitted pipeline.
///
/// Decoding failures are taken as a `Result` so they are reported in the
/// same `{"detail": ...}` shape as validation failures.
#[tracing::instrument(
    name = "http.parse_pipeline",
    skip_all,
    fields(request_id = %RequestId::new_random())
)]
pub async fn parse_pipeline(
    payload: Result<Json<PipelineRequest>, JsonRejection>,
) -> Result<Json<PipelineSummary>, ApiError> {
    let Json(request) = payload?;
    let submitted = Pipeline::from(request);

    let summary = pipeline::analyze(&submitted)?;
    tracing::info!(
        num_nodes = summary.num_nodes,
        num_edges = summary.num_edges,
        is_dag = summary.is_dag,
        "pipeline parsed"
    );
    Ok(Json(summary))
}
