// ── Resolver display entity ──
//
// One Resolver per logical service name. Raw resolver nodes that strip to
// the same service merge into a single entity; subsets and redirects hang
// off it as children.

use serde::{Deserialize, Serialize};

use crate::divergence::{Divergence, Qualifier};

/// A service resolver and its subset/redirect children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolver {
    /// First-seen raw resolver-node name that mapped to this service.
    /// Looked up in the node map under the `resolver:` prefix.
    pub id: String,
    /// The bare service name, qualifiers stripped.
    pub name: String,
    pub children: Vec<ResolverChild>,
    /// Failover attached directly to the service's own default behavior.
    pub failover: Option<Divergence>,
}

/// What a resolver child represents. A child is one or the other, never
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildKind {
    /// A named subset of the service's instances.
    Subset,
    /// A redirect to another datacenter/partition/namespace/subset,
    /// tagged with the qualifier that differs.
    Redirect(Qualifier),
}

/// A subset or redirect hanging off a [`Resolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverChild {
    pub kind: ChildKind,
    /// The raw node name (subset) or target ID (redirect).
    pub id: String,
    /// Subset prefix, or the diverging qualifier's value for a redirect.
    pub name: String,
    pub failover: Option<Divergence>,
}

impl ResolverChild {
    /// True when this child is a subset of its parent service.
    pub fn is_subset(&self) -> bool {
        matches!(self.kind, ChildKind::Subset)
    }

    /// The diverging qualifier, when this child is a redirect.
    pub fn redirect_qualifier(&self) -> Option<Qualifier> {
        match self.kind {
            ChildKind::Redirect(q) => Some(q),
            ChildKind::Subset => None,
        }
    }
}
