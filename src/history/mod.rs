//! history
//!
//! Ancestry traversal and content-revision resolution.
//!
//! # Architecture
//!
//! The walker starts from a commit, resolves the target path at each
//! visited ancestor, and groups commits by the blob content id they
//! observed. Grouping relies on the store's content-addressing invariant:
//! equal blob ids guarantee equal bytes, so ids are compared, never bytes.
//!
//! # Invariants
//!
//! - Each walk owns a fresh dedup state; walks are never reused
//! - Each reachable commit is visited at most once
//! - An unreadable ancestor degrades the result, never aborts the walk

mod walker;

pub use walker::file_history;
