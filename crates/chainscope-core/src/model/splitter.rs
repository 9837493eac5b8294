// ── Splitter display entity ──

use serde::{Deserialize, Serialize};

/// A traffic splitter: divides traffic across weighted next nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// `"splitter:" + raw node name`. Stable across recomputes.
    pub id: String,
    /// Raw name with its two trailing qualifier segments removed
    /// (keeps `service.namespace`).
    pub name: String,
    pub splits: Vec<Split>,
}

/// One weighted leg of a splitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub weight: f32,
    /// Node-map key of the downstream node.
    pub next_node: String,
}
