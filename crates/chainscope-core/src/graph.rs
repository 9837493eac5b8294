// ── Directed link graph over display entities ──
//
// Minimal adjacency list: forward-neighbor iteration is the only
// traversal the selection engine needs. Edge sources are splitter and
// route entity ids; targets are node-map keys, so resolvers appear only
// as sinks.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Route, Splitter};

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEdge {
    pub from: String,
    pub to: String,
}

impl LinkEdge {
    /// The edge's stable identifier, `"<from>><to>"`.
    pub fn id(&self) -> String {
        format!("{}>{}", self.from, self.to)
    }
}

/// Forward-adjacency view of the chain's splitter and route entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkGraph {
    edges: IndexMap<String, Vec<LinkEdge>>,
    /// Every id seen as a source or a sink.
    nodes: HashSet<String>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the graph: one edge per splitter leg, one per route.
    pub fn from_entities(splitters: &[Splitter], routes: &[Route]) -> Self {
        let mut graph = Self::new();
        for splitter in splitters {
            for split in &splitter.splits {
                graph.add_edge(&splitter.id, &split.next_node);
            }
        }
        for route in routes {
            graph.add_edge(&route.id, &route.next_node);
        }
        graph
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.nodes.insert(from.to_owned());
        self.nodes.insert(to.to_owned());
        self.edges.entry(from.to_owned()).or_default().push(LinkEdge {
            from: from.to_owned(),
            to: to.to_owned(),
        });
    }

    /// All outgoing edges of `id`; empty for sinks and unknown ids.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = &LinkEdge> {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[]).iter()
    }

    /// Whether `id` appears anywhere in the graph, as source or sink.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
