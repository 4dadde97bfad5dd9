//! Wire records for the HTTP API.
//!
//! These mirror the JSON bodies exchanged with clients. All request fields are
//! required; unknown fields are ignored. Conversion into [`pipeline::Pipeline`]
//! happens here so the domain crate never sees request wire types. The success
//! body is [`pipeline::PipelineSummary`] itself.

use serde::{Deserialize, Serialize};

use pipeline::{Edge, NodeId, Pipeline};

/// One entry of the `nodes` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRecord {
    pub id: String,
}

/// One entry of the `edges` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
}

/// Body of `POST /pipelines/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineRequest {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl From<PipelineRequest> for Pipeline {
    fn from(request: PipelineRequest) -> Self {
        let nodes = request
            .nodes
            .into_iter()
            .map(|node| NodeId::new(node.id))
            .collect();
        let edges = request
            .edges
            .into_iter()
            .map(|edge| Edge::new(edge.source, edge.target))
            .collect();
        Pipeline::new(nodes, edges)
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of what was wrong with the request.
    pub detail: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResponse {
    #[serde(rename = "Ping")]
    pub ping: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            ping: "Pong".to_owned(),
        }
    }
}
