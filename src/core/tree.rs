//! core::tree
//!
//! Tree entries and single-segment path resolution.
//!
//! A tree maps single path segments to blobs or nested trees. Resolution
//! here is deliberately single-level: one segment is matched against one
//! tree's entries per call. Callers wanting nested paths must resolve
//! segment by segment across sub-trees themselves.

use super::types::Oid;

/// The kind of object a tree entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A file (byte content).
    Blob,
    /// A nested directory tree.
    Tree,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Blob => write!(f, "blob"),
            EntryKind::Tree => write!(f, "tree"),
        }
    }
}

/// One entry of a tree: a name, the object it references, and its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Entry name, a single path segment
    pub name: String,
    /// Identifier of the referenced blob or tree
    pub id: Oid,
    /// Whether the entry is a blob or a nested tree
    pub kind: EntryKind,
}

/// Resolve a single path segment against a tree's entries.
///
/// Scans for an exact name match; the first match wins. Duplicate names do
/// not occur in a well-formed tree, so no tie-breaking beyond first-wins is
/// attempted.
///
/// Returns `None` when no entry carries the requested name.
///
/// # Example
///
/// ```
/// use todoview::core::tree::{resolve_segment, EntryKind, TreeEntry};
/// use todoview::core::types::Oid;
///
/// let entries = vec![TreeEntry {
///     name: "todo.md".into(),
///     id: Oid::new("abc123def4567890abc123def4567890abc12345").unwrap(),
///     kind: EntryKind::Blob,
/// }];
///
/// assert!(resolve_segment(&entries, "todo.md").is_some());
/// assert!(resolve_segment(&entries, "missing.md").is_none());
/// ```
pub fn resolve_segment<'a>(entries: &'a [TreeEntry], name: &str) -> Option<&'a TreeEntry> {
    entries.iter().find(|entry| entry.name == name)
}
