//! Integration tests for the registry and browse facade.

mod common;

use common::TestRepo;

use todoview::browse::{Browser, BrowseError, Registry};
use todoview::config::Config;
use todoview::core::types::{Oid, RepoName};
use todoview::store::StoreError;

fn browser_for(repo: &TestRepo) -> Browser {
    let config = Config {
        git_paths: vec![repo.path().to_path_buf()],
        listen: "127.0.0.1:0".to_string(),
    };
    Browser::new(Registry::open(&config).unwrap())
}

fn repo_name(repo: &TestRepo) -> RepoName {
    RepoName::from_location(repo.path()).unwrap()
}

#[test]
fn registry_rejects_non_repository_location() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config {
        git_paths: vec![dir.path().to_path_buf()],
        listen: "127.0.0.1:0".to_string(),
    };

    assert!(Registry::open(&config).is_err());
}

#[test]
fn registry_keys_by_final_path_segment() {
    let repo = TestRepo::new();
    let browser = browser_for(&repo);

    let expected = repo_name(&repo);
    let names: Vec<_> = browser.registry().names().cloned().collect();
    assert_eq!(names, vec![expected]);
}

#[test]
fn index_lists_tip_tree_entries() {
    let repo = TestRepo::new();
    repo.commit_file("todo.md", "- [ ] everything\n", "Add todo");
    let browser = browser_for(&repo);

    let listings = browser.browse_index();
    assert_eq!(listings.len(), 1);
    assert!(listings[0].paths.contains(&"README.md".to_string()));
    assert!(listings[0].paths.contains(&"todo.md".to_string()));
}

#[test]
fn read_file_at_tip() {
    let repo = TestRepo::new();
    repo.commit_file("todo.md", "- [ ] ship it\n", "Add todo");
    let browser = browser_for(&repo);

    let bytes = browser
        .read_file(&repo_name(&repo), "todo.md", None)
        .unwrap();
    assert_eq!(bytes, b"- [ ] ship it\n");
}

#[test]
fn read_file_at_historical_commit() {
    let repo = TestRepo::new();
    let old = repo.commit_file("todo.md", "old content\n", "todo v1");
    repo.commit_file("todo.md", "new content\n", "todo v2");
    let browser = browser_for(&repo);

    let bytes = browser
        .read_file(&repo_name(&repo), "todo.md", Some(&old))
        .unwrap();
    assert_eq!(bytes, b"old content\n");
}

#[test]
fn read_missing_file_is_path_not_found() {
    let repo = TestRepo::new();
    let browser = browser_for(&repo);

    let err = browser
        .read_file(&repo_name(&repo), "missing.md", None)
        .unwrap_err();
    assert!(matches!(
        err,
        BrowseError::Store(StoreError::PathNotFound { .. })
    ));
}

#[test]
fn read_directory_entry_is_path_not_found() {
    let repo = TestRepo::new();
    std::fs::create_dir(repo.path().join("notes")).unwrap();
    std::fs::write(repo.path().join("notes/work.md"), "work\n").unwrap();
    common::run_git(repo.path(), &["add", "notes"]);
    common::run_git(repo.path(), &["commit", "-m", "Add notes dir"]);
    let browser = browser_for(&repo);

    let err = browser
        .read_file(&repo_name(&repo), "notes", None)
        .unwrap_err();
    assert!(matches!(
        err,
        BrowseError::Store(StoreError::PathNotFound { .. })
    ));
}

#[test]
fn unknown_repository_is_typed() {
    let repo = TestRepo::new();
    let browser = browser_for(&repo);

    let err = browser
        .read_file(&RepoName::new("nope").unwrap(), "todo.md", None)
        .unwrap_err();
    assert!(matches!(err, BrowseError::UnknownRepo { .. }));
}

#[test]
fn read_file_at_unknown_commit_is_object_not_found() {
    let repo = TestRepo::new();
    let browser = browser_for(&repo);
    let bogus = Oid::new("1234567890123456789012345678901234567890").unwrap();

    let err = browser
        .read_file(&repo_name(&repo), "README.md", Some(&bogus))
        .unwrap_err();
    assert!(matches!(
        err,
        BrowseError::Store(StoreError::ObjectNotFound { .. })
    ));
}

#[test]
fn file_history_through_facade() {
    let repo = TestRepo::new();
    repo.commit_file("todo.md", "A\n", "todo: A");
    repo.commit_file("todo.md", "B\n", "todo: B");
    let browser = browser_for(&repo);

    let groups = browser
        .file_history(&repo_name(&repo), "todo.md")
        .unwrap();
    assert_eq!(groups.len(), 2);
}
