//! store
//!
//! Single interface for all object store operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to the underlying git object store.
//! All repository reads flow through this interface. No other module should
//! import `git2`.
//!
//! # Responsibilities
//!
//! - Opening configured repositories (fail-fast at startup)
//! - Branch resolution to commit ids
//! - Commit, tree and blob reads
//! - Parent enumeration for ancestry traversal
//!
//! # Invariants
//!
//! - Read-only: no operation writes to the store
//! - All operations return strong types (Oid, TreeEntry, CommitSummary)
//! - Branch refs are resolved per call, never cached across requests

mod interface;

pub use interface::{Store, StoreError};
