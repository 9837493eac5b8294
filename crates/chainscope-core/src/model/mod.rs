//! Normalized display entities.
//!
//! Every entity is an immutable snapshot derived from one chain response.
//! IDs are globally unique and type-prefixed (`splitter:`, `route:`; a
//! resolver's id is its first-seen raw node name, looked up under the
//! `resolver:` prefix).

pub mod resolver;
pub mod route;
pub mod splitter;

pub use resolver::{ChildKind, Resolver, ResolverChild};
pub use route::Route;
pub use splitter::{Split, Splitter};
