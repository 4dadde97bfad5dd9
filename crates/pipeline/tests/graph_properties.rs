//! Property tests for pipeline inspection.
//!
//! Graphs are generated over a small pool of node names so that random edges
//! hit shared endpoints, duplicates and self-loops often.

use pipeline::{analyze, Edge, NodeId, Pipeline, PipelineError};
use proptest::prelude::*;

fn names(count: usize) -> Vec<NodeId> {
    (0..count).map(|i| NodeId::new(format!("n{i}"))).collect()
}

/// Edges `n0 -> n1 -> ... -> n{count-1} -> n0`.
fn ring(count: usize) -> Vec<Edge> {
    (0..count)
        .map(|i| Edge::new(format!("n{i}"), format!("n{}", (i + 1) % count)))
        .collect()
}

prop_compose! {
    /// A node list (possibly with duplicates) plus edges between declared nodes.
    fn arb_valid_pipeline()(node_count in 1usize..12)(
        nodes in proptest::collection::vec(0..node_count, node_count..node_count * 2),
        edges in proptest::collection::vec((0..node_count, 0..node_count), 0..30),
        count in Just(node_count),
    ) -> (Pipeline, usize) {
        // Guarantee every name appears at least once so edges stay valid.
        let mut ids: Vec<NodeId> = names(count);
        ids.extend(nodes.into_iter().map(|i| NodeId::new(format!("n{i}"))));
        let edges = edges
            .into_iter()
            .map(|(s, t)| Edge::new(format!("n{s}"), format!("n{t}")))
            .collect();
        (Pipeline::new(ids, edges), count)
    }
}

proptest! {
    #[test]
    fn counts_match_distinct_nodes_and_all_edges((pipeline, distinct) in arb_valid_pipeline()) {
        let summary = analyze(&pipeline).expect("valid pipeline");
        prop_assert_eq!(summary.num_nodes, distinct);
        prop_assert_eq!(summary.num_edges, pipeline.edges.len());
    }

    #[test]
    fn analysis_is_idempotent((pipeline, _) in arb_valid_pipeline()) {
        let first = analyze(&pipeline).expect("valid pipeline");
        let second = analyze(&pipeline).expect("valid pipeline");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn any_self_loop_makes_graph_cyclic(
        (mut pipeline, distinct) in arb_valid_pipeline(),
        looped in 0usize..12,
    ) {
        let name = format!("n{}", looped % distinct);
        pipeline.edges.push(Edge::new(name.clone(), name));
        let summary = analyze(&pipeline).expect("valid pipeline");
        prop_assert!(!summary.is_dag);
    }

    #[test]
    fn edges_only_forward_in_name_order_are_acyclic((mut pipeline, _) in arb_valid_pipeline()) {
        pipeline.edges.retain(|e| e.source.as_str() < e.target.as_str());
        let summary = analyze(&pipeline).expect("valid pipeline");
        prop_assert!(summary.is_dag);
    }

    #[test]
    fn graph_without_edges_is_acyclic(count in 0usize..50) {
        let summary = analyze(&Pipeline::new(names(count), Vec::new())).expect("valid pipeline");
        prop_assert!(summary.is_dag);
        prop_assert_eq!(summary.num_nodes, count);
        prop_assert_eq!(summary.num_edges, 0);
    }

    #[test]
    fn ring_is_cyclic_until_any_edge_is_removed(count in 1usize..20, cut in 0usize..20) {
        let full = Pipeline::new(names(count), ring(count));
        prop_assert!(!analyze(&full).expect("valid pipeline").is_dag);

        let mut broken = full.clone();
        broken.edges.remove(cut % count);
        prop_assert!(analyze(&broken).expect("valid pipeline").is_dag);
    }

    #[test]
    fn dangling_edge_is_always_rejected(
        (mut pipeline, _) in arb_valid_pipeline(),
        position in 0usize..31,
        dangling_source in any::<bool>(),
    ) {
        let edge = if dangling_source {
            Edge::new("missing", "n0")
        } else {
            Edge::new("n0", "missing")
        };
        let at = position.min(pipeline.edges.len());
        pipeline.edges.insert(at, edge.clone());

        let err = analyze(&pipeline).expect_err("dangling edge");
        prop_assert_eq!(err, PipelineError::InvalidEdgeReference { edge });
    }
}
