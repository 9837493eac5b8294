// ── Highlight-neighborhood selection ──
//
// When an operator clicks a node, the surrounding two hops of the link
// graph light up. Depth is hardcoded to two, so a pathological
// splitter-to-splitter cycle cannot loop — it can only over-highlight.
// Any generalization to N hops must add a visited set.

use serde::{Deserialize, Serialize};

use crate::graph::LinkGraph;

/// The node and edge ids to highlight for one selection. Ids are opaque;
/// any DOM-selector escaping belongs to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The type prefix of an entity id: the text before the first `:`.
fn type_prefix(id: &str) -> &str {
    id.split(':').next().unwrap_or_default()
}

/// Compute the bounded two-hop forward neighborhood of `selected`.
///
/// First-hop neighbors are always included. A second-hop neighbor is
/// included only when its type differs from the selected node's type, or
/// when a splitter sits on either side — splitters always propagate their
/// downstream neighborhood both hops. Same-type chains beyond the first
/// hop stay dark so sibling routes/resolvers don't light up together.
///
/// An empty or unknown id selects nothing.
pub fn select_neighborhood(selected: &str, graph: &LinkGraph) -> Selection {
    if selected.is_empty() || !graph.contains(selected) {
        return Selection::default();
    }

    let selected_type = type_prefix(selected);
    let mut nodes = vec![selected.to_owned()];
    let mut edges = Vec::new();

    for first in graph.neighbors(selected) {
        nodes.push(first.to.clone());
        edges.push(first.id());

        for second in graph.neighbors(&first.to) {
            let neighbor_type = type_prefix(&second.to);
            if selected_type != neighbor_type
                || selected_type == "splitter"
                || neighbor_type == "splitter"
            {
                nodes.push(second.to.clone());
                edges.push(second.id());
            }
        }
    }

    Selection { nodes, edges }
}
