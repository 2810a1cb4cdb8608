//! cat command - Print one file's content

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::browse::Browser;
use crate::core::types::{Oid, RepoName};

/// Print a file's raw bytes to stdout.
///
/// With `--at` the file is read at that commit instead of the tip. No
/// display transformation is applied.
pub fn cat(browser: &Browser, repo: &str, path: &str, at: Option<&str>) -> Result<()> {
    let name = RepoName::new(repo).context("invalid repository name")?;
    let at = at
        .map(Oid::new)
        .transpose()
        .context("invalid commit id")?;

    let bytes = browser
        .read_file(&name, path, at.as_ref())
        .with_context(|| format!("cannot read {}/{}", repo, path))?;

    std::io::stdout()
        .write_all(&bytes)
        .context("cannot write to stdout")
}
