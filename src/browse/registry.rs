//! browse::registry
//!
//! The immutable registry of served repositories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::config::Config;
use crate::core::types::{RepoName, TypeError};
use crate::store::{Store, StoreError};

/// Errors from registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A configured location yields no usable repository name.
    #[error("unusable repository location '{path}': {source}")]
    InvalidLocation {
        /// The configured location
        path: PathBuf,
        /// The name validation failure
        source: TypeError,
    },

    /// A configured repository could not be opened.
    #[error("cannot open repository '{path}': {source}")]
    OpenFailed {
        /// The configured location
        path: PathBuf,
        /// The store failure
        source: StoreError,
    },
}

/// Immutable map from short repository name to storage location.
///
/// Names are the final path segment of each configured location. Two
/// locations sharing a final segment collide; the last one configured wins,
/// matching map-assignment semantics.
///
/// Construction is fail-fast: every location is opened once to validate it,
/// and any failure aborts startup. After construction the registry is
/// read-only and safely shareable across request workers.
#[derive(Debug)]
pub struct Registry {
    repos: BTreeMap<RepoName, PathBuf>,
}

impl Registry {
    /// Build the registry from configuration, validating every location.
    pub fn open(config: &Config) -> Result<Self, RegistryError> {
        let mut repos = BTreeMap::new();

        for path in &config.git_paths {
            let name =
                RepoName::from_location(path).map_err(|source| RegistryError::InvalidLocation {
                    path: path.clone(),
                    source,
                })?;

            // Validation open only; request handlers reopen per request.
            Store::open(path).map_err(|source| RegistryError::OpenFailed {
                path: path.clone(),
                source,
            })?;

            if let Some(previous) = repos.insert(name.clone(), path.clone()) {
                warn!(
                    name = %name,
                    dropped = %previous.display(),
                    kept = %path.display(),
                    "repository name collision, last configured location wins"
                );
            }
        }

        Ok(Self { repos })
    }

    /// Names of all registered repositories, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &RepoName> {
        self.repos.keys()
    }

    /// The storage location registered under a name.
    pub fn location(&self, name: &RepoName) -> Option<&Path> {
        self.repos.get(name).map(PathBuf::as_path)
    }

    /// Open a fresh store handle for a registered repository.
    ///
    /// Returns `None` for unregistered names. An open failure at request
    /// time (e.g. the repository was deleted after startup) surfaces as the
    /// inner `StoreError`.
    pub fn open_store(&self, name: &RepoName) -> Option<Result<Store, StoreError>> {
        self.repos.get(name).map(|path| Store::open(path))
    }

    /// Number of registered repositories.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}
