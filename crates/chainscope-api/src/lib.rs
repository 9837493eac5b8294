//! Wire-level types for Consul's compiled discovery chain.
//!
//! The agent's `/v1/discovery-chain/:service` endpoint returns a flat,
//! loosely-typed graph: a map of heterogeneous nodes (routers, splitters,
//! resolvers) keyed by compound string identifiers, plus a map of
//! fully-qualified targets. This crate models that response as-is —
//! normalization into display entities lives in `chainscope-core`.
//!
//! Missing `Nodes`/`Targets` collections deserialize to empty maps; truly
//! malformed JSON is surfaced as [`Error::MalformedResponse`] rather than
//! being masked.

pub mod chain;
pub mod error;

pub use chain::{
    CompiledChain, NodeKind, RawFailover, RawNode, RawResolver, RawRoute, RawSplit, RawSubset,
    RawTarget,
};
pub use error::Error;
