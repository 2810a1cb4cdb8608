//! config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! One JSON file, loaded once at startup, lists the repository storage
//! locations to serve and the address the HTTP server binds. A missing or
//! malformed file is a fatal startup error - the process has nothing to
//! serve without it.
//!
//! # Example file
//!
//! ```json
//! {
//!   "git_paths": ["/srv/git/todo", "/srv/git/notes"],
//!   "listen": "127.0.0.1:3000"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default bind address when the config file doesn't set one.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config lists no repositories")]
    NoRepositories,
}

/// Process configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Storage locations of the repositories to serve
    pub git_paths: Vec<PathBuf>,

    /// Bind address for the HTTP server
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] if the file cannot be read
    /// - [`ConfigError::ParseError`] if the JSON is malformed
    /// - [`ConfigError::NoRepositories`] if `git_paths` is empty
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if config.git_paths.is_empty() {
            return Err(ConfigError::NoRepositories);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_paths_and_listen() {
        let file = write_config(r#"{"git_paths": ["/srv/git/todo"], "listen": "0.0.0.0:8080"}"#);
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.git_paths, vec![PathBuf::from("/srv/git/todo")]);
        assert_eq!(config.listen, "0.0.0.0:8080");
    }

    #[test]
    fn listen_defaults_when_absent() {
        let file = write_config(r#"{"git_paths": ["/srv/git/todo"]}"#);
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.listen, DEFAULT_LISTEN);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_config("{not json");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn empty_repository_list_is_rejected() {
        let file = write_config(r#"{"git_paths": []}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NoRepositories));
    }
}
