//! core
//!
//! Core domain types for the browser.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoName, Oid
//! - [`tree`] - Tree entries and single-segment path resolution
//! - [`revision`] - Revision groups produced by the history walker
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Everything here is immutable once constructed and free of I/O

pub mod revision;
pub mod tree;
pub mod types;
