// ── Route display entity ──

use serde::{Deserialize, Serialize};

/// One router rule, flattened out of its owning router node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// `"route:" + router name + "-" + uid(definition)`, so two routes with
    /// identical definitions on different routers stay distinct.
    pub id: String,
    /// The owning router's name (or the chain's service name for the
    /// synthesized catch-all route).
    pub name: String,
    /// True for an explicit default rule or a route with no match
    /// definition at all.
    pub default: bool,
    /// Opaque match definition (`Match.HTTP.PathPrefix` etc.).
    pub definition: Option<serde_json::Value>,
    /// Node-map key of the downstream node.
    pub next_node: String,
}
