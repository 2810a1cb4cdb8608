//! Shared test fixture: real git repositories created via tempfile.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use todoview::core::types::Oid;
use todoview::store::Store;

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create an empty test repository (no commits yet).
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        Self { dir }
    }

    /// Create a test repository with an initial commit.
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.commit_file("README.md", "# Test Repo\n", "Initial commit");
        repo
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a store handle to this repository.
    pub fn store(&self) -> Store {
        Store::open(self.path()).expect("failed to open test repo")
    }

    /// Create a file and commit it, returning the new commit id.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) -> Oid {
        std::fs::write(self.dir.path().join(path), content).unwrap();
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "-m", message]);

        self.head()
    }

    /// Delete a file and commit the deletion, returning the new commit id.
    pub fn remove_file(&self, path: &str, message: &str) -> Oid {
        run_git(self.path(), &["rm", "-q", path]);
        run_git(self.path(), &["commit", "-m", message]);

        self.head()
    }

    /// Create a branch at the current HEAD.
    pub fn create_branch(&self, name: &str) {
        run_git(self.path(), &["branch", name]);
    }

    /// Checkout a branch.
    pub fn checkout(&self, name: &str) {
        run_git(self.path(), &["checkout", "-q", name]);
    }

    /// Merge a branch into the current one with a merge commit.
    pub fn merge(&self, name: &str, message: &str) -> Oid {
        run_git(self.path(), &["merge", "--no-ff", "-m", message, name]);

        self.head()
    }

    /// Get HEAD as a typed id using git directly.
    pub fn head(&self) -> Oid {
        let raw = git_stdout(self.path(), &["rev-parse", "HEAD"]);
        Oid::new(raw).unwrap()
    }

    /// Get the blob id a path resolves to at a commit, using git directly.
    pub fn blob_of(&self, commit: &Oid, path: &str) -> Oid {
        let raw = git_stdout(self.path(), &["rev-parse", &format!("{}:{}", commit, path)]);
        Oid::new(raw).unwrap()
    }

    /// Get the top-level tree id of a commit using git directly.
    pub fn tree_of(&self, commit: &Oid) -> String {
        git_stdout(self.path(), &["rev-parse", &format!("{}^{{tree}}", commit)])
    }

    /// Remove a loose object from the store, simulating corruption.
    pub fn corrupt_object(&self, oid: &str) {
        let object = self
            .path()
            .join(".git/objects")
            .join(&oid[..2])
            .join(&oid[2..]);
        assert!(object.exists(), "expected loose object for {}", oid);
        std::fs::remove_file(object).unwrap();
    }
}

/// Run a git command in the given directory, asserting success.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Run a git command and return its trimmed stdout.
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");

    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
