// ── Compiled discovery chain wire types ──
//
// Shapes mirror the agent's compiled-chain JSON. Node map keys are
// `"<type>:<Name>"` (e.g. `resolver:web.default.default.dc1`); target map
// keys are the target's own ID. Insertion order of both maps is preserved
// because display order and canonical-ID selection downstream depend on it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// A compiled discovery chain for one service, as returned by
/// `/v1/discovery-chain/:service`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompiledChain {
    pub service_name: String,
    pub namespace: String,
    pub partition: String,
    pub datacenter: String,
    pub nodes: IndexMap<String, RawNode>,
    pub targets: IndexMap<String, RawTarget>,
}

impl CompiledChain {
    /// Decode a chain from a JSON string.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let chain: Self = serde_json::from_str(body)?;
        debug!(
            service = %chain.service_name,
            nodes = chain.nodes.len(),
            targets = chain.targets.len(),
            "decoded discovery chain"
        );
        Ok(chain)
    }

    /// Decode a chain from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// The chain's own identity as a compound identifier
    /// (`service.namespace.partition.datacenter`).
    pub fn base_identity(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.service_name, self.namespace, self.partition, self.datacenter
        )
    }

    /// Node-map key of the chain's own splitter, if the compiler emitted one.
    /// Splitter names omit the datacenter segment.
    pub fn splitter_key(&self) -> String {
        format!(
            "splitter:{}.{}.{}",
            self.service_name, self.namespace, self.partition
        )
    }

    /// Node-map key of the chain's own resolver.
    pub fn resolver_key(&self) -> String {
        format!("resolver:{}", self.base_identity())
    }
}

/// Discriminator for the three node flavors in the chain graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Router,
    Splitter,
    Resolver,
}

/// One node in the chain graph. Only the fields matching `kind` are
/// populated; the rest stay at their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawNode {
    #[serde(rename = "Type")]
    pub kind: NodeKind,
    pub name: String,
    /// Router rules, in match order.
    #[serde(default)]
    pub routes: Vec<RawRoute>,
    /// Splitter legs.
    #[serde(default)]
    pub splits: Vec<RawSplit>,
    /// Resolver configuration.
    #[serde(default)]
    pub resolver: Option<RawResolver>,
}

/// A single router rule: a match definition plus the node it forwards to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRoute {
    /// The route definition (`Match.HTTP.PathPrefix` etc.). Kept opaque —
    /// the match grammar varies by protocol and we only ever probe it.
    #[serde(default)]
    pub definition: Option<serde_json::Value>,
    pub next_node: String,
    /// Explicit default-rule marker.
    #[serde(default)]
    pub default: bool,
}

/// One weighted leg of a splitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSplit {
    pub weight: f32,
    pub next_node: String,
}

/// Resolver configuration attached to a resolver node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawResolver {
    /// ID of the target this resolver selects.
    #[serde(default)]
    pub target: String,
    /// True when this resolver was synthesized rather than configured.
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub failover: Option<RawFailover>,
}

/// Ordered fallback list used when the primary target is unhealthy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFailover {
    #[serde(default)]
    pub targets: Vec<String>,
}

/// A fully-qualified, resolved service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTarget {
    #[serde(rename = "ID")]
    pub id: String,
    pub service: String,
    pub namespace: String,
    pub partition: String,
    pub datacenter: String,
    #[serde(default)]
    pub subset: Option<RawSubset>,
}

/// A named, filtered slice of a service's instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSubset {
    #[serde(default)]
    pub filter: String,
}
