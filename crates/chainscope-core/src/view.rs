// ── ChainView facade ──
//
// One full pipeline run per chain snapshot. There is no dependency
// tracking or incremental update: a new response means a new ChainView,
// and recomputation over the same input is idempotent.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use chainscope_api::CompiledChain;

use crate::convert::{append_default_route, build_resolvers, normalize_routes, normalize_splitters};
use crate::graph::LinkGraph;
use crate::model::{Resolver, Route, Splitter};
use crate::selection::{Selection, select_neighborhood};

/// The fully normalized view of one discovery-chain snapshot, ready for a
/// rendering layer to consume.
#[derive(Debug, Clone, Serialize)]
pub struct ChainView {
    pub splitters: Vec<Splitter>,
    pub routes: Vec<Route>,
    pub resolvers: Vec<Resolver>,
    graph: LinkGraph,
}

impl ChainView {
    /// Run the whole pipeline over one chain response.
    ///
    /// `uid` is the embedding application's short-identifier generator
    /// (a GUID or hash function); it only has to be deterministic per
    /// distinct route definition.
    pub fn compute<F>(chain: &CompiledChain, uid: F) -> Self
    where
        F: Fn(&Value) -> String,
    {
        let splitters = normalize_splitters(&chain.nodes);
        let mut routes = normalize_routes(&chain.nodes, &uid);
        append_default_route(&mut routes, chain);
        let resolvers = build_resolvers(
            &chain.datacenter,
            &chain.partition,
            &chain.namespace,
            &chain.targets,
            &chain.nodes,
        );
        let graph = LinkGraph::from_entities(&splitters, &routes);

        debug!(
            service = %chain.service_name,
            splitters = splitters.len(),
            routes = routes.len(),
            resolvers = resolvers.len(),
            edges = graph.edge_count(),
            "computed chain view"
        );

        Self {
            splitters,
            routes,
            resolvers,
            graph,
        }
    }

    /// The link graph over splitter and route entities.
    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    /// The two-hop highlight neighborhood for a clicked node id.
    pub fn selected(&self, id: &str) -> Selection {
        select_neighborhood(id, &self.graph)
    }
}
