//! core::revision
//!
//! Output model of the history walker.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::Oid;

/// Summary of one commit as it appears in revision history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    /// The commit id
    pub id: Oid,
    /// The commit message
    pub message: String,
    /// The author timestamp
    pub timestamp: DateTime<Utc>,
}

/// A maximal run of ancestry-adjacent commits that observed the same
/// content for the target path.
///
/// Groups are emitted in traversal order, each headed by the content id it
/// represents. Content ids are unique across the groups of one walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionGroup {
    /// Identifier of the blob content this group observed
    pub content_id: Oid,
    /// Commits that carried this content, in traversal order
    pub commits: Vec<CommitSummary>,
}

impl RevisionGroup {
    /// Start a new group for a content id with its first observing commit.
    pub fn open(content_id: Oid, first: CommitSummary) -> Self {
        Self {
            content_id,
            commits: vec![first],
        }
    }
}
