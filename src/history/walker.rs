//! history::walker
//!
//! The history walk: breadth-first-by-generation ancestry traversal,
//! producing ordered revision groups deduplicated by content id.
//!
//! # Traversal
//!
//! Commits are taken from a queue, generation by generation: every parent
//! of a visited commit is enqueued as a peer before any grandparent is
//! visited. Linear ancestry degenerates to a first-parent chain; at a merge
//! commit each parent is visited once at the current depth. A visited set
//! keeps diamond-shaped graphs to one visit per commit, so the walk is
//! O(commits reachable) with one tree scan per commit.
//!
//! # Grouping
//!
//! - A content id seen for the first time opens a new group
//! - A repeat of the id heading the still-open group extends that group
//! - A repeat of an id from an already-closed group is terminal: it is
//!   recorded at debug level and extends nothing; groups never reopen
//!
//! # Degradation
//!
//! A commit whose tree or summary cannot be read is logged and skipped;
//! the walk continues with the remaining ancestors. A commit that simply
//! lacks the target path is skipped silently - the file did not exist
//! there.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, error, warn};

use crate::core::revision::{CommitSummary, RevisionGroup};
use crate::core::tree::{resolve_segment, EntryKind};
use crate::core::types::Oid;
use crate::store::{Store, StoreError};

/// Walk a file's ancestry from `start` and return its revision groups.
///
/// Groups are ordered by traversal: the group observed at `start` first,
/// older content later. A path that never appears along the ancestry
/// yields an empty vec, not an error.
pub fn file_history(store: &Store, start: Oid, segment: &str) -> Vec<RevisionGroup> {
    let mut accumulator = GroupAccumulator::new();
    let mut visited: HashSet<Oid> = HashSet::new();
    let mut queue: VecDeque<Oid> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(commit) = queue.pop_front() {
        match observe_commit(store, &commit, segment) {
            Ok(Some((content_id, summary))) => accumulator.observe(content_id, summary),
            Ok(None) => {}
            Err(err) if err.is_recoverable_in_walk() => {
                warn!(commit = %commit.short(12), error = %err, "skipping unreadable ancestor");
            }
            Err(err) => {
                // Still a skip: a partial history beats no history.
                error!(commit = %commit.short(12), error = %err, "unexpected store failure");
            }
        }

        match store.commit_parents(&commit) {
            Ok(parents) => {
                for parent in parents {
                    if visited.insert(parent.clone()) {
                        queue.push_back(parent);
                    }
                }
            }
            Err(err) => {
                warn!(
                    commit = %commit.short(12),
                    error = %err,
                    "cannot enumerate parents, ancestry chain truncated"
                );
            }
        }
    }

    accumulator.into_groups()
}

/// Resolve the target path at one commit.
///
/// Returns the content id and commit summary when the path resolves to a
/// blob, `None` when the path is absent (or names a sub-tree) there.
fn observe_commit(
    store: &Store,
    commit: &Oid,
    segment: &str,
) -> Result<Option<(Oid, CommitSummary)>, StoreError> {
    let entries = store.tree_entries(commit)?;

    let content_id = match resolve_segment(&entries, segment) {
        Some(entry) if entry.kind == EntryKind::Blob => entry.id.clone(),
        _ => return Ok(None),
    };

    let summary = store.commit_summary(commit)?;
    Ok(Some((content_id, summary)))
}

/// Accumulates revision groups from a stream of (content id, commit)
/// observations in traversal order.
///
/// Owns the per-walk `seen` set; one accumulator serves exactly one walk.
#[derive(Debug, Default)]
struct GroupAccumulator {
    seen: HashSet<Oid>,
    groups: Vec<RevisionGroup>,
}

impl GroupAccumulator {
    fn new() -> Self {
        Self::default()
    }

    /// Record that `commit` observed `content_id` for the target path.
    fn observe(&mut self, content_id: Oid, commit: CommitSummary) {
        if self.seen.insert(content_id.clone()) {
            self.groups.push(RevisionGroup::open(content_id, commit));
            return;
        }

        if let Some(open) = self.groups.last_mut() {
            if open.content_id == content_id {
                open.commits.push(commit);
                return;
            }
        }

        // Superseded content resurfaced on another chain. Terminal
        // encounter: recorded here, extends nothing, reopens nothing.
        debug!(
            commit = %commit.id.short(12),
            content = %content_id.short(12),
            "superseded content reappeared, not regrouped"
        );
    }

    fn into_groups(self) -> Vec<RevisionGroup> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn oid(fill: char) -> Oid {
        Oid::new(fill.to_string().repeat(40)).unwrap()
    }

    fn commit(n: u8) -> CommitSummary {
        CommitSummary {
            id: Oid::new(format!("{:040x}", n)).unwrap(),
            message: format!("commit {}", n),
            timestamp: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn first_observation_opens_group() {
        let mut acc = GroupAccumulator::new();
        acc.observe(oid('a'), commit(1));

        let groups = acc.into_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].content_id, oid('a'));
        assert_eq!(groups[0].commits.len(), 1);
    }

    #[test]
    fn adjacent_run_shares_one_group() {
        // C3 = "B", C2 = "B", C1 = "A" walked tip-first
        let mut acc = GroupAccumulator::new();
        acc.observe(oid('b'), commit(3));
        acc.observe(oid('b'), commit(2));
        acc.observe(oid('a'), commit(1));

        let groups = acc.into_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].content_id, oid('b'));
        assert_eq!(groups[0].commits.len(), 2);
        assert_eq!(groups[0].commits[0].message, "commit 3");
        assert_eq!(groups[0].commits[1].message, "commit 2");
        assert_eq!(groups[1].content_id, oid('a'));
    }

    #[test]
    fn distinct_content_counts_equal_group_counts() {
        let mut acc = GroupAccumulator::new();
        acc.observe(oid('a'), commit(5));
        acc.observe(oid('b'), commit(4));
        acc.observe(oid('b'), commit(3));
        acc.observe(oid('c'), commit(2));

        let groups = acc.into_groups();
        let mut ids: Vec<_> = groups.iter().map(|g| g.content_id.clone()).collect();
        assert_eq!(groups.len(), 3);
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn superseded_content_does_not_reopen_group() {
        // Content 'a' reappears after 'b' superseded it: the encounter is
        // terminal and must neither extend the 'a' group nor open a new one.
        let mut acc = GroupAccumulator::new();
        acc.observe(oid('a'), commit(4));
        acc.observe(oid('b'), commit(3));
        acc.observe(oid('a'), commit(2));
        acc.observe(oid('b'), commit(1));

        let groups = acc.into_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].content_id, oid('a'));
        assert_eq!(groups[0].commits.len(), 1);
        assert_eq!(groups[1].content_id, oid('b'));
        assert_eq!(groups[1].commits.len(), 1);
    }

    #[test]
    fn no_observations_no_groups() {
        let acc = GroupAccumulator::new();
        assert!(acc.into_groups().is_empty());
    }
}
