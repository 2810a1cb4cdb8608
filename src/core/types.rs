//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoName`] - Validated short repository name
//! - [`Oid`] - Git object identifier (SHA)
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use todoview::core::types::{Oid, RepoName};
//!
//! // Valid constructions
//! let name = RepoName::new("todo").unwrap();
//! let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(RepoName::new("a/b").is_err());
//! assert!(Oid::new("not-a-sha").is_err());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository name: {0}")]
    InvalidRepoName(String),

    #[error("invalid object id: {0}")]
    InvalidOid(String),
}

/// A validated short repository name.
///
/// Repository names identify an opened repository in the registry and appear
/// as a path parameter in URLs, so they must be a single segment:
/// - Cannot be empty
/// - Cannot contain `/` or `\`
/// - Cannot be `.` or `..`
/// - Cannot contain ASCII control characters
///
/// # Example
///
/// ```
/// use todoview::core::types::RepoName;
///
/// let name = RepoName::new("todo").unwrap();
/// assert_eq!(name.as_str(), "todo");
///
/// assert!(RepoName::new("").is_err());
/// assert!(RepoName::new("a/b").is_err());
/// assert!(RepoName::new("..").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName(String);

impl RepoName {
    /// Create a new validated repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name is not a valid
    /// single path segment.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Derive a repository name from a storage location.
    ///
    /// Uses the final path segment, matching how repositories are keyed in
    /// the registry.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use todoview::core::types::RepoName;
    ///
    /// let name = RepoName::from_location(Path::new("/srv/git/todo")).unwrap();
    /// assert_eq!(name.as_str(), "todo");
    /// ```
    pub fn from_location(location: &Path) -> Result<Self, TypeError> {
        let segment = location
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                TypeError::InvalidRepoName(format!(
                    "location has no usable final segment: {}",
                    location.display()
                ))
            })?;
        Self::new(segment)
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot be empty".into(),
            ));
        }

        if name == "." || name == ".." {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot be '.' or '..'".into(),
            ));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot contain path separators".into(),
            ));
        }

        for c in name.chars() {
            if c.is_ascii_control() {
                return Err(TypeError::InvalidRepoName(
                    "repository name cannot contain control characters".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the repository name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RepoName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RepoName> for String {
    fn from(name: RepoName) -> Self {
        name.0
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated git object identifier.
///
/// Used for commits and blobs alike. Blob identifiers are content-derived:
/// equal identifiers guarantee equal bytes, which is the invariant the
/// history walker's deduplication relies on.
///
/// # Example
///
/// ```
/// use todoview::core::types::Oid;
///
/// let oid = Oid::new("ABC123def4567890abc123def4567890abc12345").unwrap();
/// // Normalized to lowercase
/// assert_eq!(oid.short(7), "abc123d");
///
/// assert!(Oid::new("xyz").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid(String);

impl Oid {
    /// Create a new validated object id.
    ///
    /// The id is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOid` if the string is not a valid hex id.
    pub fn new(oid: impl Into<String>) -> Result<Self, TypeError> {
        let oid = oid.into().to_ascii_lowercase();
        Self::validate(&oid)?;
        Ok(Self(oid))
    }

    /// Get an abbreviated form of the id.
    ///
    /// Returns the first `len` characters. If `len` exceeds the id length,
    /// returns the full id.
    pub fn short(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }

    fn validate(oid: &str) -> Result<(), TypeError> {
        // SHA-1 is 40 hex chars, SHA-256 is 64
        if oid.len() != 40 && oid.len() != 64 {
            return Err(TypeError::InvalidOid(format!(
                "expected 40 or 64 hex characters, got {}",
                oid.len()
            )));
        }

        if !oid.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidOid(
                "object id must be hexadecimal".into(),
            ));
        }

        Ok(())
    }

    /// Get the object id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Oid {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.0
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
