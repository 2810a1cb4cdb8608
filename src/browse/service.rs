//! browse::service
//!
//! The browse facade: the boundary API consumed by the CLI and HTTP
//! layers.

use thiserror::Error;
use tracing::warn;

use crate::core::revision::RevisionGroup;
use crate::core::tree::{resolve_segment, EntryKind};
use crate::core::types::{Oid, RepoName};
use crate::history;
use crate::store::{Store, StoreError};

use super::registry::Registry;

/// Errors from browse operations.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The repository name is not registered.
    #[error("unknown repository: {name}")]
    UnknownRepo {
        /// The requested name
        name: RepoName,
    },

    /// The underlying store failed or lacked the requested object.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One repository's entry in the index view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoListing {
    /// The repository's short name
    pub name: RepoName,
    /// Tracked file names at the tip tree, flat and in store order
    pub paths: Vec<String>,
}

/// The browse facade over the registry.
///
/// All operations are reads; the facade is freely shareable across
/// concurrent request workers.
#[derive(Debug)]
pub struct Browser {
    registry: Registry,
}

impl Browser {
    /// Wrap a constructed registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// List every repository with the tracked paths at its tip.
    ///
    /// A repository whose tip cannot be read at request time is listed
    /// with no paths rather than failing the whole index; the failure is
    /// logged. Entry names come back flat, non-recursive, in store order.
    pub fn browse_index(&self) -> Vec<RepoListing> {
        self.registry
            .names()
            .map(|name| RepoListing {
                name: name.clone(),
                paths: self.tip_paths(name).unwrap_or_else(|err| {
                    warn!(repo = %name, error = %err, "index listing unavailable");
                    Vec::new()
                }),
            })
            .collect()
    }

    /// Read a file's bytes at the tip, or at an explicit commit.
    ///
    /// With `at` absent the primary branch tip is consulted; an explicit
    /// commit id selects an arbitrary historical point. A path that is
    /// absent - or names a directory - is a typed
    /// [`StoreError::PathNotFound`] absence, not a crash.
    pub fn read_file(
        &self,
        name: &RepoName,
        path: &str,
        at: Option<&Oid>,
    ) -> Result<Vec<u8>, BrowseError> {
        let store = self.open(name)?;

        let commit = match at {
            Some(oid) => oid.clone(),
            None => store.head()?,
        };

        let entries = store.tree_entries(&commit)?;
        let entry = match resolve_segment(&entries, path) {
            Some(entry) if entry.kind == EntryKind::Blob => entry,
            _ => {
                return Err(StoreError::PathNotFound {
                    path: path.to_string(),
                }
                .into())
            }
        };

        Ok(store.read_blob(&entry.id)?)
    }

    /// Walk a file's revision history from the primary branch tip.
    ///
    /// Returns the ordered revision groups; a path that never existed
    /// along the ancestry yields an empty vec.
    pub fn file_history(
        &self,
        name: &RepoName,
        path: &str,
    ) -> Result<Vec<RevisionGroup>, BrowseError> {
        let store = self.open(name)?;
        let tip = store.head()?;

        Ok(history::file_history(&store, tip, path))
    }

    fn open(&self, name: &RepoName) -> Result<Store, BrowseError> {
        match self.registry.open_store(name) {
            Some(result) => Ok(result?),
            None => Err(BrowseError::UnknownRepo { name: name.clone() }),
        }
    }

    fn tip_paths(&self, name: &RepoName) -> Result<Vec<String>, BrowseError> {
        let store = self.open(name)?;
        let tip = store.head()?;
        let entries = store.tree_entries(&tip)?;

        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}
