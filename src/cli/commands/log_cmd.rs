//! log command - Print a file's revision history

use anyhow::{Context as _, Result};

use crate::browse::Browser;
use crate::core::types::RepoName;

/// Print a file's revision groups, one block per distinct content state.
pub fn log(browser: &Browser, repo: &str, path: &str) -> Result<()> {
    let name = RepoName::new(repo).context("invalid repository name")?;

    let groups = browser
        .file_history(&name, path)
        .with_context(|| format!("cannot walk history of {}/{}", repo, path))?;

    if groups.is_empty() {
        println!("no history for {}", path);
        return Ok(());
    }

    for group in groups {
        println!("content {}", group.content_id.short(12));
        for commit in &group.commits {
            let first_line = commit.message.lines().next().unwrap_or("");
            println!(
                "  {} {} {}",
                commit.id.short(12),
                commit.timestamp.format("%Y-%m-%d"),
                first_line
            );
        }
    }

    Ok(())
}
