//! Pipeline payload structures

use serde::{Deserialize, Serialize};

/// A pipeline node; only the id matters for validation
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub id: String,
}

/// Directed edge between two node ids
///
/// Either endpoint may reference an id that was never declared in the
/// node list - the validator still accounts for it.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Pipeline as submitted by the client, one validation call's worth
#[derive(Debug, Default, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Structural report returned to the client
///
/// `num_nodes` / `num_edges` are the raw input lengths, duplicates and
/// dangling endpoints included. `is_dag` is computed over the effective
/// vertex set (declared ids plus every edge endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_deserializes_from_client_json() {
        let json = r#"{
            "nodes": [{"id": "node1"}, {"id": "node2"}],
            "edges": [{"source": "node1", "target": "node2"}]
        }"#;
        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert_eq!(pipeline.nodes.len(), 2);
        assert_eq!(pipeline.edges.len(), 1);
        assert_eq!(pipeline.edges[0].source, "node1");
        assert_eq!(pipeline.edges[0].target, "node2");
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let pipeline: Pipeline = serde_json::from_str("{}").unwrap();
        assert!(pipeline.nodes.is_empty());
        assert!(pipeline.edges.is_empty());
    }

    #[test]
    fn report_serializes_with_expected_field_names() {
        let report = PipelineReport {
            num_nodes: 2,
            num_edges: 1,
            is_dag: true,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["num_nodes"], 2);
        assert_eq!(json["num_edges"], 1);
        assert_eq!(json["is_dag"], true);
    }
}
