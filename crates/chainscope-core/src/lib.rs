//! Display model for Consul discovery chains.
//!
//! Turns the flat, string-identifier-encoded graph delivered by
//! `chainscope-api` into everything an interactive visualization needs:
//!
//! - **[`identity`]** — parses the dotted compound identifiers
//!   (`service.namespace.partition.datacenter`, optionally led by a subset
//!   discriminator) that key every node and target.
//! - **[`divergence`]** — classifies which qualifier differs between two
//!   identifiers; drives redirect detection and failover annotations.
//! - **[`convert`]** — normalizes raw nodes into display entities:
//!   [`Splitter`]s, [`Route`]s (with default-route synthesis), and the
//!   [`Resolver`] tree with subset/redirect children.
//! - **[`graph`]** — a directed [`LinkGraph`] over splitter and route
//!   entities; resolvers are always sinks.
//! - **[`selection`]** — the bounded two-hop neighborhood highlighted when
//!   an operator clicks a node.
//! - **[`ChainView`]** — the facade: one full recompute per chain snapshot,
//!   plus [`selected()`](ChainView::selected) queries against the prebuilt
//!   graph.
//!
//! Everything here is a pure, synchronous function of one chain response.
//! Entities are immutable snapshots; a new response means a new
//! [`ChainView`], never an in-place update.

pub mod convert;
pub mod divergence;
pub mod graph;
pub mod identity;
pub mod model;
pub mod selection;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use divergence::{Divergence, Qualifier, classify_divergence};
pub use graph::{LinkEdge, LinkGraph};
pub use identity::{ServiceIdentity, split_qualifiers, splitter_display_name};
pub use model::{ChildKind, Resolver, ResolverChild, Route, Split, Splitter};
pub use selection::{Selection, select_neighborhood};
pub use view::ChainView;
