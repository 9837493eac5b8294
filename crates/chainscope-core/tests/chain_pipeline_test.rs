#![allow(clippy::unwrap_used)]
// End-to-end pipeline tests over a realistic multi-node chain fixture.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use chainscope_api::CompiledChain;
use chainscope_core::{ChainView, Qualifier};

// ── Helpers ─────────────────────────────────────────────────────────

/// Deterministic stand-in for the embedding app's uid collaborator.
fn uid(definition: &Value) -> String {
    let text = definition.to_string();
    let sum: u32 = text.bytes().map(u32::from).sum();
    format!("{sum:x}")
}

/// A chain exercising every entity flavor at once: a router with two
/// rules, a splitter over two subsets, a cross-dc redirect with its own
/// failover, and a failover-only target with no node.
fn fixture() -> CompiledChain {
    CompiledChain::from_value(json!({
        "ServiceName": "web",
        "Namespace": "default",
        "Partition": "default",
        "Datacenter": "dc1",
        "Nodes": {
            "router:web.default.default": {
                "Type": "router",
                "Name": "web.default.default",
                "Routes": [
                    {
                        "Definition": { "Match": { "HTTP": { "PathPrefix": "/admin" } } },
                        "NextNode": "resolver:admin.default.default.dc1"
                    },
                    {
                        "Definition": { "Match": { "HTTP": { "PathPrefix": "/" } } },
                        "NextNode": "splitter:web.default.default"
                    }
                ]
            },
            "splitter:web.default.default": {
                "Type": "splitter",
                "Name": "web.default.default",
                "Splits": [
                    { "Weight": 90.0, "NextNode": "resolver:v1.web.default.default.dc1" },
                    { "Weight": 10.0, "NextNode": "resolver:v2.web.default.default.dc1" }
                ]
            },
            "resolver:v1.web.default.default.dc1": {
                "Type": "resolver",
                "Name": "v1.web.default.default.dc1",
                "Resolver": { "Target": "v1.web.default.default.dc1" }
            },
            "resolver:v2.web.default.default.dc1": {
                "Type": "resolver",
                "Name": "v2.web.default.default.dc1",
                "Resolver": { "Target": "v2.web.default.default.dc1" }
            },
            "resolver:admin.default.default.dc1": {
                "Type": "resolver",
                "Name": "admin.default.default.dc1",
                "Resolver": { "Target": "admin.default.default.dc1" }
            },
            "resolver:payments.default.default.dc2": {
                "Type": "resolver",
                "Name": "payments.default.default.dc2",
                "Resolver": {
                    "Target": "payments.default.default.dc2",
                    "Failover": { "Targets": ["payments.default.default.dc3"] }
                }
            }
        },
        "Targets": {
            "v1.web.default.default.dc1": {
                "ID": "v1.web.default.default.dc1",
                "Service": "web", "Namespace": "default",
                "Partition": "default", "Datacenter": "dc1",
                "Subset": { "Filter": "Service.Meta.version == 1" }
            },
            "v2.web.default.default.dc1": {
                "ID": "v2.web.default.default.dc1",
                "Service": "web", "Namespace": "default",
                "Partition": "default", "Datacenter": "dc1",
                "Subset": { "Filter": "Service.Meta.version == 2" }
            },
            "admin.default.default.dc1": {
                "ID": "admin.default.default.dc1",
                "Service": "admin", "Namespace": "default",
                "Partition": "default", "Datacenter": "dc1"
            },
            "payments.default.default.dc2": {
                "ID": "payments.default.default.dc2",
                "Service": "payments", "Namespace": "default",
                "Partition": "default", "Datacenter": "dc2"
            },
            "payments.default.default.dc3": {
                "ID": "payments.default.default.dc3",
                "Service": "payments", "Namespace": "default",
                "Partition": "default", "Datacenter": "dc3"
            }
        }
    }))
    .unwrap()
}

// ── Pipeline shape ──────────────────────────────────────────────────

#[test]
fn pipeline_produces_all_entity_flavors() {
    let view = ChainView::compute(&fixture(), uid);

    assert_eq!(view.splitters.len(), 1);
    assert_eq!(view.splitters[0].name, "web");

    // Two router rules; the "/" rule already exists so nothing is
    // synthesized on top.
    assert_eq!(view.routes.len(), 2);
    assert!(view.routes.iter().all(|r| !r.default));

    let names: BTreeSet<&str> = view.resolvers.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["admin", "payments", "web"].into_iter().collect());
}

#[test]
fn subsets_merge_and_redirects_annotate() {
    let view = ChainView::compute(&fixture(), uid);

    let web = view.resolvers.iter().find(|r| r.name == "web").unwrap();
    assert_eq!(web.children.len(), 2);
    assert!(web.children.iter().all(|c| c.is_subset()));

    let payments = view.resolvers.iter().find(|r| r.name == "payments").unwrap();
    assert_eq!(payments.children.len(), 1);
    let redirect = &payments.children[0];
    assert_eq!(redirect.redirect_qualifier(), Some(Qualifier::Datacenter));
    assert_eq!(redirect.name, "dc2");
    // The redirect target's own failover, classified against its id.
    let failover = redirect.failover.as_ref().unwrap();
    assert_eq!(failover.qualifier, Some(Qualifier::Datacenter));
    assert_eq!(failover.targets, vec!["dc3".to_owned()]);

    // dc3 is failover-only: no resolver node, so no child anywhere.
    let all_child_ids: Vec<&str> = view
        .resolvers
        .iter()
        .flat_map(|r| r.children.iter().map(|c| c.id.as_str()))
        .collect();
    assert!(!all_child_ids.contains(&"payments.default.default.dc3"));
}

#[test]
fn graph_links_routes_and_splitters_to_sinks() {
    let view = ChainView::compute(&fixture(), uid);
    // 2 route edges + 2 splitter edges.
    assert_eq!(view.graph().edge_count(), 4);
    assert_eq!(
        view.graph().neighbors("splitter:web.default.default").count(),
        2
    );
}

// ── Selection ───────────────────────────────────────────────────────

#[test]
fn clicking_the_catch_all_route_lights_up_the_split() {
    let view = ChainView::compute(&fixture(), uid);
    let catch_all = view
        .routes
        .iter()
        .find(|r| {
            r.definition
                .as_ref()
                .and_then(|d| d.pointer("/Match/HTTP/PathPrefix"))
                .and_then(Value::as_str)
                == Some("/")
        })
        .unwrap();

    let selection = view.selected(&catch_all.id);
    let nodes: BTreeSet<&str> = selection.nodes.iter().map(String::as_str).collect();
    assert!(nodes.contains(catch_all.id.as_str()));
    assert!(nodes.contains("splitter:web.default.default"));
    assert!(nodes.contains("resolver:v1.web.default.default.dc1"));
    assert!(nodes.contains("resolver:v2.web.default.default.dc1"));
    assert_eq!(selection.edges.len(), 3);
}

#[test]
fn clicking_nothing_or_stale_ids_selects_nothing() {
    let view = ChainView::compute(&fixture(), uid);
    assert!(view.selected("").is_empty());
    assert!(view.selected("route:from-a-previous-snapshot").is_empty());
}

#[test]
fn recompute_is_idempotent() {
    let chain = fixture();
    let a = ChainView::compute(&chain, uid);
    let b = ChainView::compute(&chain, uid);
    assert_eq!(a.splitters, b.splitters);
    assert_eq!(a.routes, b.routes);
    assert_eq!(a.resolvers, b.resolvers);
}

// ── Default-route synthesis through the facade ──────────────────────

#[test]
fn chain_without_catch_all_gains_a_synthetic_route() {
    let chain = CompiledChain::from_value(json!({
        "ServiceName": "web",
        "Namespace": "default",
        "Partition": "default",
        "Datacenter": "dc1",
        "Nodes": {
            "router:web.default.default": {
                "Type": "router",
                "Name": "web.default.default",
                "Routes": [{
                    "Definition": { "Match": { "HTTP": { "PathPrefix": "/admin" } } },
                    "NextNode": "resolver:admin.default.default.dc1"
                }]
            },
            "resolver:web.default.default.dc1": {
                "Type": "resolver",
                "Name": "web.default.default.dc1"
            },
            "resolver:admin.default.default.dc1": {
                "Type": "resolver",
                "Name": "admin.default.default.dc1"
            }
        }
    }))
    .unwrap();

    let view = ChainView::compute(&chain, uid);
    assert_eq!(view.routes.len(), 2);
    let synthetic = view.routes.iter().find(|r| r.default).unwrap();
    assert_eq!(synthetic.id, "route:web");
    assert_eq!(synthetic.next_node, "resolver:web.default.default.dc1");
    // The synthetic route is a real graph edge, not a dangling label.
    assert!(
        view.graph()
            .neighbors("route:web")
            .any(|e| e.to == "resolver:web.default.default.dc1")
    );
}

#[test]
fn empty_chain_degrades_to_an_empty_view() {
    let chain = CompiledChain::from_json(
        r#"{"ServiceName":"lonely","Namespace":"default","Partition":"default","Datacenter":"dc1"}"#,
    )
    .unwrap();
    let view = ChainView::compute(&chain, uid);
    assert!(view.splitters.is_empty());
    assert!(view.routes.is_empty());
    assert!(view.resolvers.is_empty());
    assert_eq!(view.graph().edge_count(), 0);
    assert!(view.selected("resolver:lonely.default.default.dc1").is_empty());
}
