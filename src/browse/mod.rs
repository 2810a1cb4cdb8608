//! browse
//!
//! Repository registry and the browse facade.
//!
//! # Architecture
//!
//! The [`Registry`] is built once at startup from configuration and never
//! mutated afterwards: an immutable map from short repository name to
//! storage location, validated fail-fast. The [`Browser`] facade layered on
//! top is the boundary API the CLI and HTTP layers consume: index listing,
//! file content, file history.
//!
//! Request handlers open a fresh [`crate::store::Store`] per operation.
//! Opening an already-validated repository is cheap, keeps reads free of
//! shared locks, and guarantees branch refs are re-resolved per request.

mod registry;
mod service;

pub use registry::{Registry, RegistryError};
pub use service::{Browser, BrowseError, RepoListing};
