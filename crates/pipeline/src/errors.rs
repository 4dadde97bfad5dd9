//! Error types for the pipeline inspection domain.
//!
//! Inspection performs no I/O, so there are no transient failures and nothing
//! here is retryable. Every [`PipelineError`] is a deterministic defect in the
//! submitted input.

use thiserror::Error;

use crate::Edge;

/// Errors produced while inspecting a submitted pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// An edge names a source or target that is not among the declared nodes.
    ///
    /// Only the first offending edge, in submission order, is reported.
    #[error("Invalid node ID in edge: {edge}")]
    InvalidEdgeReference {
        /// The offending edge, exactly as submitted.
        edge: Edge,
    },
}
