pub mod validator;

use crate::validation::{child, resolver};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Graph of the `$ref` nodes in a document.
///
/// Every node is a location holding a `$ref`. An edge `a -> b` means the
/// reference at `a` points directly at the reference node `b`, so resolving
/// `a` requires another hop through `b`.
#[derive(Debug, Clone, Default)]
pub struct RefGraph {
    pub graph: DiGraph<RefNode, ()>,

    /// Mapping from location to NodeIndex for quick lookup
    pub location_index_map: HashMap<String, NodeIndex>,
}

/// A reference node in the document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefNode {
    /// Location of the node carrying `$ref`, e.g. `#/components/schemas/Pet`
    pub location: String,

    /// The raw pointer, e.g. `#/components/schemas/Animal`
    pub target: String,
}

impl RefNode {
    /// Whether the pointer stays inside the current document
    pub fn is_local(&self) -> bool {
        self.target.starts_with('#')
    }
}

impl RefGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: RefNode) -> NodeIndex {
        let location = node.location.clone();
        let index = self.graph.add_node(node);
        self.location_index_map.insert(location, index);
        index
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    pub fn get_node(&self, location: &str) -> Option<&RefNode> {
        self.location_index_map
            .get(location)
            .and_then(|idx| self.graph.node_weight(*idx))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RefNode> {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Collect every `$ref` in `document` and link references that point at references
pub fn build_ref_graph(document: &Value) -> RefGraph {
    let mut graph = RefGraph::new();
    collect_refs(document, "#", &mut graph);

    let links: Vec<(NodeIndex, NodeIndex)> = graph
        .graph
        .node_indices()
        .filter_map(|from| {
            graph
                .location_index_map
                .get(&graph.graph[from].target)
                .map(|&to| (from, to))
        })
        .collect();

    for (from, to) in links {
        graph.add_edge(from, to);
    }

    tracing::debug!(
        refs = graph.node_count(),
        chained = graph.edge_count(),
        "built $ref graph"
    );
    graph
}

fn collect_refs(node: &Value, location: &str, graph: &mut RefGraph) {
    match node {
        Value::Object(map) => {
            if let Ok(Some(target)) = resolver::reference(node, location) {
                graph.add_node(RefNode {
                    location: location.to_string(),
                    target: target.to_string(),
                });
            }
            for (key, nested) in map {
                collect_refs(nested, &child(location, key), graph);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                collect_refs(nested, &child(location, index), graph);
            }
        }
        _ => {}
    }
}
