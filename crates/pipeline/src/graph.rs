//! Edge validation and cycle detection.
//!
//! Inspection runs in two steps. [`validate`] checks that every edge refers to
//! declared nodes and, on success, produces a [`ValidatedGraph`] holding an
//! index-based adjacency list and in-degree table. [`ValidatedGraph::is_acyclic`]
//! then runs Kahn's algorithm over that structure. Because detection is only
//! reachable through a successful validation, it never sees a dangling edge.
//!
//! # Algorithm Overview
//!
//! Kahn's algorithm seeds a FIFO queue with every node whose in-degree is
//! zero, then repeatedly pops a node, counts it as visited and decrements the
//! in-degree of each of its successors. A successor whose in-degree reaches
//! zero joins the queue. Nodes on a cycle (including any node with a
//! self-loop) never reach zero, so the graph is acyclic exactly when every
//! node gets visited.
//!
//! Duplicate edges are kept: each one adds to the target's in-degree and is
//! decremented separately.

use std::collections::{HashMap, VecDeque};

use crate::{Edge, NodeId, Pipeline, PipelineError, PipelineSummary};

// ---------------------------------------------------------------------------
// Node set
// ---------------------------------------------------------------------------

/// The distinct node identifiers of a pipeline.
///
/// Iterates in first-seen order and maps each identifier to a dense index
/// used by [`ValidatedGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    order: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl NodeSet {
    /// Creates an empty node set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.order.len());
        self.order.push(id);
        true
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the set holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Dense index of `id`, or `None` if it is not declared.
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Iterates identifiers in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> FromIterator<&'a NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = &'a NodeId>>(iter: I) -> Self {
        iter.into_iter().cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A graph whose edges are known to reference only declared nodes.
#[derive(Debug, Clone)]
pub struct ValidatedGraph<'a> {
    nodes: &'a NodeSet,
    /// Successor indices per node, one entry per edge (multiplicity kept).
    successors: Vec<Vec<usize>>,
    /// Incoming edge count per node, before any traversal.
    in_degree: Vec<usize>,
    edge_count: usize,
}

/// Checks that every edge's source and target are declared in `nodes`.
///
/// Edges are scanned in the given order and the scan stops at the first edge
/// with an undeclared endpoint, which is returned in
/// [`PipelineError::InvalidEdgeReference`].
pub fn validate<'a>(
    nodes: &'a NodeSet,
    edges: &[Edge],
) -> Result<ValidatedGraph<'a>, PipelineError> {
    let mut successors = vec![Vec::new(); nodes.len()];
    let mut in_degree = vec![0usize; nodes.len()];

    for edge in edges {
        let (Some(source), Some(target)) =
            (nodes.index_of(&edge.source), nodes.index_of(&edge.target))
        else {
            tracing::debug!(%edge, "edge references undeclared node");
            return Err(PipelineError::InvalidEdgeReference { edge: edge.clone() });
        };
        successors[source].push(target);
        in_degree[target] += 1;
    }

    Ok(ValidatedGraph {
        nodes,
        successors,
        in_degree,
        edge_count: edges.len(),
    })
}

// ---------------------------------------------------------------------------
// Cycle detection
// ---------------------------------------------------------------------------

impl ValidatedGraph<'_> {
    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Incoming edge count of `id`, or `None` if it is not declared.
    pub fn in_degree(&self, id: &NodeId) -> Option<usize> {
        self.nodes.index_of(id).map(|idx| self.in_degree[idx])
    }

    /// Returns `true` if the graph has no directed cycle.
    ///
    /// Runs Kahn's algorithm on a copy of the in-degree table, so the graph
    /// can be queried any number of times with the same answer.
    pub fn is_acyclic(&self) -> bool {
        let mut in_degree = self.in_degree.clone();

        let mut queue: VecDeque<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(idx, _)| idx)
            .collect();

        let mut visited_count: usize = 0;

        while let Some(node) = queue.pop_front() {
            visited_count += 1;

            for &target in &self.successors[node] {
                // Each edge into `target` is decremented at most once, so this
                // never goes below zero.
                in_degree[target] -= 1;
                if in_degree[target] == 0 {
                    queue.push_back(target);
                }
            }
        }

        visited_count == self.nodes.len()
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Inspects a submitted pipeline.
///
/// Collapses duplicate node identifiers, validates every edge and, only if
/// validation passes, runs cycle detection.
#[tracing::instrument(
    name = "pipeline.analyze",
    skip_all,
    fields(submitted_nodes = pipeline.nodes.len(), submitted_edges = pipeline.edges.len())
)]
pub fn analyze(pipeline: &Pipeline) -> Result<PipelineSummary, PipelineError> {
    let nodes: NodeSet = pipeline.nodes.iter().collect();
    let graph = validate(&nodes, &pipeline.edges)?;

    let summary = PipelineSummary {
        num_nodes: graph.node_count(),
        num_edges: graph.edge_count(),
        is_dag: graph.is_acyclic(),
    };
    tracing::debug!(
        num_nodes = summary.num_nodes,
        num_edges = summary.num_edges,
        is_dag = summary.is_dag,
        "pipeline analyzed"
    );
    Ok(summary)
}
