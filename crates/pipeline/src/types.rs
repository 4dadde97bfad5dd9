//! Shared value types for the pipeline inspection domain.
//!
//! A [`Pipeline`] is the graph as submitted by a caller. A [`PipelineSummary`]
//! is what inspection derives from it. Neither is persisted; both live for the
//! duration of a single request.

use serde::Serialize;

use crate::NodeId;

// ---------------------------------------------------------------------------
// Graph input
// ---------------------------------------------------------------------------

/// A directed edge between two nodes of the same pipeline.
///
/// Edges are ordered pairs. Two edges with the same endpoints are distinct
/// entries and both count towards the target's in-degree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Node the edge leaves from.
    pub source: NodeId,
    /// Node the edge points to.
    pub target: NodeId,
}

impl Edge {
    /// Creates a new edge from `source` to `target`.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

// ---------------------------------------------------------------------------

/// A submitted graph: declared nodes plus the edges between them.
///
/// `nodes` may contain duplicates; they collapse to one node during
/// inspection. `edges` is kept in submission order because that order decides
/// which dangling edge is reported first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Declared node identifiers.
    pub nodes: Vec<NodeId>,
    /// Directed edges, in submission order.
    pub edges: Vec<Edge>,
}

impl Pipeline {
    /// Creates a pipeline from node identifiers and edges.
    pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

// ---------------------------------------------------------------------------
// Inspection output
// ---------------------------------------------------------------------------

/// Structural facts derived from a valid [`Pipeline`].
///
/// Serializes directly as the `POST /pipelines/parse` response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PipelineSummary {
    /// Number of distinct node identifiers.
    pub num_nodes: usize,
    /// Number of submitted edges, duplicates included.
    pub num_edges: usize,
    /// `true` if the graph contains no directed cycle.
    pub is_dag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_display_uses_arrow() {
        assert_eq!(Edge::new("A", "X").to_string(), "A -> X");
    }

    #[test]
    fn summary_serializes_with_wire_field_names() {
        let summary = PipelineSummary {
            num_nodes: 3,
            num_edges: 2,
            is_dag: true,
        };
        let value = serde_json::to_value(summary).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({ "num_nodes": 3, "num_edges": 2, "is_dag": true })
        );
    }
}
