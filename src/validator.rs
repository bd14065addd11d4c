//! Pipeline DAG validation
//!
//! Checks whether a submitted pipeline is a Directed Acyclic Graph using
//! Kahn's algorithm (topological elimination by in-degree). Iterative on
//! purpose: no recursion depth limit on deep graphs.

use std::collections::{HashMap, VecDeque};

use crate::pipeline::{Edge, Node, Pipeline, PipelineReport};

/// Validate a pipeline and report structural counts plus acyclicity.
///
/// Total over any well-typed input: empty collections, self-loops,
/// parallel edges, and edges referencing undeclared ids are all defined
/// results, never errors. Counts reflect raw input lengths without
/// deduplication.
pub fn validate(pipeline: &Pipeline) -> PipelineReport {
    PipelineReport {
        num_nodes: pipeline.nodes.len(),
        num_edges: pipeline.edges.len(),
        is_dag: is_acyclic(&pipeline.nodes, &pipeline.edges),
    }
}

/// Kahn's algorithm over the effective vertex set: declared node ids
/// plus every id appearing as an edge endpoint.
///
/// The graph is acyclic iff every vertex can be eliminated in topological
/// order; any vertex left with positive in-degree sits on (or downstream
/// of) a cycle. O(V + E) time and space.
fn is_acyclic(nodes: &[Node], edges: &[Edge]) -> bool {
    let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut in_degree: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        in_degree.entry(node.id.as_str()).or_insert(0);
    }

    for edge in edges {
        // Undeclared endpoints join the vertex set with in-degree 0
        in_degree.entry(edge.source.as_str()).or_insert(0);
        successors
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        *in_degree.entry(edge.target.as_str()).or_insert(0) += 1;
    }

    // Seed with every predecessor-free vertex; each disconnected
    // component contributes its own entry points
    let mut queue: VecDeque<&str> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&id, _)| id)
        .collect();

    let mut processed = 0usize;
    while let Some(id) = queue.pop_front() {
        processed += 1;
        if let Some(targets) = successors.get(id) {
            for &target in targets {
                if let Some(degree) = in_degree.get_mut(target) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(target);
                    }
                }
            }
        }
    }

    processed == in_degree.len()
}
