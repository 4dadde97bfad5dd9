//! Core inspection domain for submitted pipelines.
//!
//! A pipeline is a directed graph of named nodes. This crate validates that
//! every edge refers to declared nodes and determines whether the graph is
//! acyclic. It is pure: no I/O, no process-wide state, every call independent.
//!
//! ## Architectural Layer
//!
//! **Business logic.** This crate has no I/O dependencies. The HTTP boundary
//! in the `listener` crate converts wire records into [`Pipeline`] and
//! [`PipelineSummary`] back into responses.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`NodeId`, `RequestId`) |
//! | [`types`] | Graph input and output values (`Edge`, `Pipeline`, `PipelineSummary`) |
//! | [`graph`] | Edge validation and Kahn's-algorithm cycle detection |
//! | [`errors`] | Inspection error type |

pub mod errors;
pub mod graph;
pub mod identifiers;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::PipelineError;
pub use graph::{analyze, validate, NodeSet, ValidatedGraph};
pub use identifiers::{NodeId, RequestId};
pub use types::{Edge, Pipeline, PipelineSummary};
