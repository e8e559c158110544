use super::{RefGraph, build_ref_graph};
use crate::validation::resolver::resolve_pointer;
use petgraph::algo::tarjan_scc;
use serde_json::Value;

/// Lints the `$ref` pointers of a document
pub struct RefGraphValidator<'a> {
    document: &'a Value,
    graph: RefGraph,
}

impl<'a> RefGraphValidator<'a> {
    pub fn new(document: &'a Value) -> Self {
        Self {
            document,
            graph: build_ref_graph(document),
        }
    }

    pub fn graph(&self) -> &RefGraph {
        &self.graph
    }

    pub fn validate(&self) -> RefLintResult {
        let mut result = RefLintResult {
            is_valid: true,
            refs: self.graph.node_count(),
            errors: vec![],
            warnings: vec![],
        };

        for node in self.graph.nodes() {
            if !node.is_local() {
                result.warnings.push(format!(
                    "{}: external reference '{}' is not checked",
                    node.location, node.target
                ));
            } else if resolve_pointer(self.document, &node.target).is_err() {
                result.errors.push(format!(
                    "{}: unresolvable $ref '{}'",
                    node.location, node.target
                ));
            }
        }

        for cycle in self.find_cycles() {
            result
                .errors
                .push(format!("Circular $ref chain: {}", cycle.join(" → ")));
        }

        let chained = self.graph.edge_count();
        if chained > 0 {
            result.warnings.push(format!(
                "Found {} $ref nodes pointing at another $ref (resolved transitively)",
                chained
            ));
        }

        result.is_valid = result.errors.is_empty();
        result
    }

    /// Strongly connected components that loop back on themselves.
    /// Each cycle is listed from its first location back to that location.
    fn find_cycles(&self) -> Vec<Vec<String>> {
        let graph = &self.graph.graph;

        tarjan_scc(graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&idx| graph.contains_edge(idx, idx))
            })
            .map(|mut component| {
                component.sort_by(|a, b| graph[*a].location.cmp(&graph[*b].location));
                let mut locations: Vec<String> = component
                    .iter()
                    .map(|&idx| graph[idx].location.clone())
                    .collect();
                if let Some(first) = locations.first().cloned() {
                    locations.push(first);
                }
                locations
            })
            .collect()
    }
}

/// Result of a `$ref` lint
#[derive(Debug, Clone)]
pub struct RefLintResult {
    pub is_valid: bool,

    /// Number of `$ref` nodes found
    pub refs: usize,

    pub errors: Vec<String>,

    pub warnings: Vec<String>,
}

impl RefLintResult {
    pub fn is_ok(&self) -> bool {
        self.is_valid
    }

    pub fn summary(&self) -> String {
        if self.is_valid {
            format!(
                "{} references checked with {} warnings",
                self.refs,
                self.warnings.len()
            )
        } else {
            format!(
                "{} references checked, {} errors",
                self.refs,
                self.errors.len()
            )
        }
    }
}

pub fn validate_refs(document: &Value) -> RefLintResult {
    RefGraphValidator::new(document).validate()
}
