//! store::interface
//!
//! Object store adapter implemented over git2.
//!
//! The [`Store`] struct is a read-only façade over one git repository. It
//! normalizes libgit2 errors into the typed failure categories the rest of
//! the crate recovers from or reports ([`StoreError`]), and bridges raw
//! object data into the strong types of [`crate::core`].
//!
//! # Error Handling
//!
//! - [`StoreError::RefNotFound`]: branch name has no current target
//! - [`StoreError::ObjectNotFound`]: commit/tree/blob id absent from store
//! - [`StoreError::PathNotFound`]: requested file absent from a tree
//! - [`StoreError::Unavailable`]: I/O failure reading the store
//!
//! `PathNotFound` is a normal, reportable absence - the boundary layer
//! renders it as a 404-equivalent, never a crash.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::revision::CommitSummary;
use crate::core::tree::{EntryKind, TreeEntry};
use crate::core::types::{Oid, TypeError};

/// Errors from object store operations.
///
/// The categorization lets callers choose recovery versus propagation per
/// site: history traversal skips an ancestor on `Unavailable`, while a
/// single-file lookup reports `PathNotFound` as a typed absence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured location is not a git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The location that was opened
        path: PathBuf,
    },

    /// Requested branch has no current target.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Commit, tree or blob id absent from the store.
    #[error("object not found: {oid}")]
    ObjectNotFound {
        /// The id that was not found
        oid: String,
    },

    /// Requested path segment absent from the tree consulted.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path segment that was looked up
        path: String,
    },

    /// Invalid object id format.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// The invalid id string
        oid: String,
    },

    /// I/O or internal failure reading the underlying store.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Description of the failure
        message: String,
    },
}

impl StoreError {
    /// Create a StoreError from a git2::Error with richer context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => {
                if context.starts_with("refs/") || context.contains("ref") {
                    StoreError::RefNotFound {
                        refname: context.to_string(),
                    }
                } else {
                    StoreError::ObjectNotFound {
                        oid: context.to_string(),
                    }
                }
            }
            git2::ErrorCode::InvalidSpec => StoreError::InvalidOid {
                oid: context.to_string(),
            },
            _ => StoreError::Unavailable {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }

    /// Whether history traversal should recover from this failure by
    /// skipping the affected ancestor rather than aborting the walk.
    pub fn is_recoverable_in_walk(&self) -> bool {
        matches!(
            self,
            StoreError::ObjectNotFound { .. }
                | StoreError::PathNotFound { .. }
                | StoreError::Unavailable { .. }
        )
    }
}

impl From<TypeError> for StoreError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidOid(msg) => StoreError::InvalidOid { oid: msg },
            TypeError::InvalidRepoName(msg) => StoreError::Unavailable { message: msg },
        }
    }
}

/// Read-only handle to one git repository's object store.
///
/// All reads in the crate flow through this interface; no other module
/// imports `git2`. The handle owns no mutable state - commits, trees and
/// blobs are immutable once resolved, and branch refs are re-read on every
/// [`Store::resolve_branch`]/[`Store::head`] call so a ref that moves
/// between requests is picked up.
///
/// # Example
///
/// ```ignore
/// use todoview::store::Store;
/// use std::path::Path;
///
/// let store = Store::open(Path::new("/srv/git/todo"))?;
/// let tip = store.head()?;
/// for entry in store.tree_entries(&tip)? {
///     println!("{}", entry.name);
/// }
/// ```
pub struct Store {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Store {
    // =========================================================================
    // Opening
    // =========================================================================

    /// Open the repository at the given location.
    ///
    /// The location must point directly at a repository (bare or not);
    /// parent directories are not searched. Bare repositories are fully
    /// supported - reads go through trees and blobs, never a working
    /// directory.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotARepo`] if the location is not a repository
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let repo = git2::Repository::open(path).map_err(|_| StoreError::NotARepo {
            path: path.to_path_buf(),
        })?;

        Ok(Self { repo })
    }

    // =========================================================================
    // Ref Resolution
    // =========================================================================

    /// Resolve a local branch name to the commit id it points at.
    ///
    /// The ref is read fresh on every call; results must not be cached
    /// across requests since the ref can move concurrently.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RefNotFound`] if the branch doesn't exist
    pub fn resolve_branch(&self, name: &str) -> Result<Oid, StoreError> {
        let refname = format!("refs/heads/{}", name);
        let reference = self
            .repo
            .find_reference(&refname)
            .map_err(|e| StoreError::from_git2(e, &refname))?;

        let oid = reference
            .peel_to_commit()
            .map_err(|e| StoreError::from_git2(e, &refname))?
            .id();

        Oid::new(oid.to_string()).map_err(|e| e.into())
    }

    /// Get the primary branch tip: the commit HEAD points at.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RefNotFound`] if HEAD is unborn (empty repository)
    pub fn head(&self) -> Result<Oid, StoreError> {
        let head = self
            .repo
            .head()
            .map_err(|e| StoreError::from_git2(e, "HEAD"))?;

        let oid = head
            .peel_to_commit()
            .map_err(|e| StoreError::from_git2(e, "HEAD"))?
            .id();

        Oid::new(oid.to_string()).map_err(|e| e.into())
    }

    // =========================================================================
    // Commit Reads
    // =========================================================================

    /// Get the summary of a commit: id, message and author timestamp.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ObjectNotFound`] if the commit doesn't exist
    pub fn commit_summary(&self, oid: &Oid) -> Result<CommitSummary, StoreError> {
        let commit = self.find_commit(oid)?;

        let author = commit.author();
        let timestamp = chrono::DateTime::from_timestamp(author.when().seconds(), 0)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH);

        Ok(CommitSummary {
            id: oid.clone(),
            message: commit.message().unwrap_or("").to_string(),
            timestamp,
        })
    }

    /// Get the parent ids of a commit, in order.
    ///
    /// Returns an empty vec for root commits, multiple ids for merges.
    pub fn commit_parents(&self, oid: &Oid) -> Result<Vec<Oid>, StoreError> {
        let commit = self.find_commit(oid)?;

        let mut parents = Vec::new();
        for parent in commit.parents() {
            parents.push(Oid::new(parent.id().to_string())?);
        }

        Ok(parents)
    }

    // =========================================================================
    // Tree and Blob Reads
    // =========================================================================

    /// Get the entries of a commit's top-level tree, in store order.
    ///
    /// Entries whose names are not valid UTF-8, and entries that are
    /// neither blobs nor trees (e.g. submodule pointers), are skipped.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ObjectNotFound`] if the commit doesn't exist
    /// - [`StoreError::Unavailable`] if the tree cannot be read
    pub fn tree_entries(&self, commit: &Oid) -> Result<Vec<TreeEntry>, StoreError> {
        let commit_obj = self.find_commit(commit)?;
        let tree = commit_obj.tree().map_err(|e| StoreError::Unavailable {
            message: format!("tree of {}: {}", commit, e.message()),
        })?;

        let mut entries = Vec::new();
        for entry in tree.iter() {
            let name = match entry.name() {
                Some(n) => n.to_string(),
                None => continue,
            };

            let kind = match entry.kind() {
                Some(git2::ObjectType::Blob) => EntryKind::Blob,
                Some(git2::ObjectType::Tree) => EntryKind::Tree,
                _ => continue,
            };

            entries.push(TreeEntry {
                name,
                id: Oid::new(entry.id().to_string())?,
                kind,
            });
        }

        Ok(entries)
    }

    /// Read a blob's bytes by content id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ObjectNotFound`] if the blob doesn't exist
    pub fn read_blob(&self, oid: &Oid) -> Result<Vec<u8>, StoreError> {
        let git_oid = self.parse_oid(oid)?;

        let blob = self
            .repo
            .find_blob(git_oid)
            .map_err(|e| StoreError::from_git2(e, oid.as_str()))?;

        Ok(blob.content().to_vec())
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn parse_oid(&self, oid: &Oid) -> Result<git2::Oid, StoreError> {
        git2::Oid::from_str(oid.as_str()).map_err(|e| StoreError::from_git2(e, oid.as_str()))
    }

    fn find_commit(&self, oid: &Oid) -> Result<git2::Commit<'_>, StoreError> {
        let git_oid = self.parse_oid(oid)?;
        self.repo
            .find_commit(git_oid)
            .map_err(|e| StoreError::from_git2(e, oid.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_location_is_not_a_repo() {
        let err = Store::open(Path::new("/nonexistent/todoview-test")).unwrap_err();
        assert!(matches!(err, StoreError::NotARepo { .. }));
    }

    #[test]
    fn error_display_formatting() {
        let err = StoreError::PathNotFound {
            path: "todo.md".to_string(),
        };
        assert_eq!(err.to_string(), "path not found: todo.md");

        let err = StoreError::RefNotFound {
            refname: "refs/heads/master".to_string(),
        };
        assert!(err.to_string().contains("refs/heads/master"));
    }

    #[test]
    fn walk_recovery_classification() {
        assert!(StoreError::Unavailable {
            message: "disk".into()
        }
        .is_recoverable_in_walk());
        assert!(StoreError::ObjectNotFound { oid: "abc".into() }.is_recoverable_in_walk());
        assert!(StoreError::PathNotFound {
            path: "todo.md".into()
        }
        .is_recoverable_in_walk());

        assert!(!StoreError::RefNotFound {
            refname: "refs/heads/master".into()
        }
        .is_recoverable_in_walk());
        assert!(!StoreError::NotARepo {
            path: PathBuf::from("/tmp")
        }
        .is_recoverable_in_walk());
    }
}
