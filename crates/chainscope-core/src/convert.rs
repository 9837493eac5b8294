// ── Wire-to-display normalization ──
//
// Bridges `chainscope_api` raw chain nodes into display entities. Each
// normalizer only reads the raw maps, never mutates them, and is a pure
// function of one chain response. Raw-map insertion order is preserved:
// it drives display order and which raw name becomes a resolver's
// canonical id.

use indexmap::IndexMap;
use serde_json::{Value, json};

use chainscope_api::{CompiledChain, NodeKind, RawNode, RawRoute, RawTarget};

use crate::divergence::{Qualifier, classify_divergence};
use crate::identity::{split_qualifiers, splitter_display_name};
use crate::model::{ChildKind, Resolver, ResolverChild, Route, Split, Splitter};

// ── Splitters ──────────────────────────────────────────────────────

/// Extract all splitter nodes into display entities, in raw-map order.
pub fn normalize_splitters(nodes: &IndexMap<String, RawNode>) -> Vec<Splitter> {
    nodes
        .values()
        .filter(|node| node.kind == NodeKind::Splitter)
        .map(|node| Splitter {
            id: format!("splitter:{}", node.name),
            name: splitter_display_name(&node.name),
            splits: node
                .splits
                .iter()
                .map(|split| Split {
                    weight: split.weight,
                    next_node: split.next_node.clone(),
                })
                .collect(),
        })
        .collect()
}

// ── Routes ─────────────────────────────────────────────────────────

/// Stamp one raw router rule into a display `Route`.
///
/// `uid` makes the id unique per match definition, so two rules with the
/// same definition on different routers never collide.
pub fn create_route<F>(raw: &RawRoute, router_name: &str, uid: &F) -> Route
where
    F: Fn(&Value) -> String,
{
    let definition_key = raw.definition.as_ref().unwrap_or(&Value::Null);
    // No match definition means the rule catches everything.
    let has_match = raw
        .definition
        .as_ref()
        .is_some_and(|d| d.get("Match").is_some());

    Route {
        id: format!("route:{}-{}", router_name, uid(definition_key)),
        name: router_name.to_owned(),
        default: raw.default || !has_match,
        definition: raw.definition.clone(),
        next_node: raw.next_node.clone(),
    }
}

/// Flatten every router node's rules into display `Route`s.
pub fn normalize_routes<F>(nodes: &IndexMap<String, RawNode>, uid: &F) -> Vec<Route>
where
    F: Fn(&Value) -> String,
{
    nodes
        .values()
        .filter(|node| node.kind == NodeKind::Router)
        .flat_map(|node| {
            node.routes
                .iter()
                .map(|route| create_route(route, &node.name, uid))
        })
        .collect()
}

/// Synthesize the catch-all route when the chain has none.
///
/// Applies only when no existing route matches `PathPrefix "/"` and none is
/// missing its definition entirely. The synthetic route points at the
/// chain's own splitter when one exists, else its own resolver; with
/// neither present nothing is added, so the graph never gains a dangling
/// edge.
pub fn append_default_route(routes: &mut Vec<Route>, chain: &CompiledChain) {
    let has_catch_all = routes.iter().any(|route| {
        route
            .definition
            .as_ref()
            .and_then(|d| d.pointer("/Match/HTTP/PathPrefix"))
            .and_then(Value::as_str)
            == Some("/")
    });
    let has_bare_route = routes.iter().any(|route| route.definition.is_none());
    if has_catch_all || has_bare_route {
        return;
    }

    let splitter_key = chain.splitter_key();
    let resolver_key = chain.resolver_key();
    let next_node = if chain.nodes.contains_key(&splitter_key) {
        splitter_key
    } else if chain.nodes.contains_key(&resolver_key) {
        resolver_key
    } else {
        return;
    };

    routes.push(Route {
        id: format!("route:{}", chain.service_name),
        name: chain.service_name.clone(),
        default: true,
        definition: Some(json!({ "Match": { "HTTP": { "PathPrefix": "/" } } })),
        next_node,
    });
}

// ── Resolvers ──────────────────────────────────────────────────────

/// Get-or-create the resolver entity for a logical service. The id is
/// fixed by whoever creates the entry first.
fn resolver_entry<'a>(
    resolvers: &'a mut IndexMap<String, Resolver>,
    service: &str,
    canonical_id: impl FnOnce() -> String,
) -> &'a mut Resolver {
    resolvers
        .entry(service.to_owned())
        .or_insert_with(|| Resolver {
            id: canonical_id(),
            name: service.to_owned(),
            children: Vec::new(),
            failover: None,
        })
}

/// Build one `Resolver` per logical service, with subset children,
/// redirect children, and failover annotations.
///
/// Two passes: resolver nodes first (which also fixes canonical ids),
/// then targets. A target with no matching resolver node is a pure
/// failover target and produces nothing here.
pub fn build_resolvers(
    dc: &str,
    partition: &str,
    namespace: &str,
    targets: &IndexMap<String, RawTarget>,
    nodes: &IndexMap<String, RawNode>,
) -> Vec<Resolver> {
    let mut resolvers: IndexMap<String, Resolver> = IndexMap::new();

    // Pass 1: resolver nodes → entities, subset children, own failover.
    for node in nodes.values().filter(|n| n.kind == NodeKind::Resolver) {
        let identity = split_qualifiers(&node.name);

        let failover = node
            .resolver
            .as_ref()
            .and_then(|r| r.failover.as_ref())
            .map(|f| classify_divergence(&f.targets, &node.name));

        let entry = resolver_entry(&mut resolvers, &identity.service, || node.name.clone());
        match identity.subset {
            Some(subset) => entry.children.push(ResolverChild {
                kind: ChildKind::Subset,
                id: node.name.clone(),
                name: subset,
                failover,
            }),
            None => {
                // The service's own default behavior fails over.
                if failover.is_some() {
                    entry.failover = failover;
                }
            }
        }
    }

    // Pass 2: targets → redirect children.
    for target in targets.values() {
        let Some(node) = nodes.get(&format!("resolver:{}", target.id)) else {
            // Failover-only target; invisible in the tree.
            continue;
        };

        // Classify against the target's home identity in this chain's
        // namespace/partition/datacenter. Anything other than the service
        // position is a redirect; no divergence at all means the target
        // *is* the home identity.
        let home = format!("{}.{}.{}.{}", target.service, namespace, partition, dc);
        let divergence = classify_divergence(std::slice::from_ref(&target.id), &home);
        let Some(qualifier) = divergence.qualifier else {
            continue;
        };
        if qualifier == Qualifier::Service {
            continue;
        }

        let entry = resolver_entry(&mut resolvers, &target.service, || {
            format!("{}.{}.{}.{}", target.service, namespace, partition, dc)
        });
        // Subset nodes were already attached in pass 1; a child is a
        // subset or a redirect, never both.
        if entry.children.iter().any(|child| child.id == target.id) {
            continue;
        }

        let failover = node
            .resolver
            .as_ref()
            .and_then(|r| r.failover.as_ref())
            .map(|f| classify_divergence(&f.targets, &target.id));

        entry.children.push(ResolverChild {
            kind: ChildKind::Redirect(qualifier),
            id: target.id.clone(),
            name: divergence.targets.first().cloned().unwrap_or_default(),
            failover,
        });
    }

    resolvers.into_values().collect()
}
