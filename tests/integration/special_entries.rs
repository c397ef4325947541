//! Integration tests for entries that are neither plain files nor directories

#![cfg(unix)]

use crate::integration::test_utils::create_fixture;
use dircontents::{walk, walk_blocking, Config, Node, Value, WalkError};
use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::process::Command;

/// A named pipe is skipped by both walkers without error
#[tokio::test]
async fn test_fifo_is_skipped() {
    let (_temp_dir, root) = create_fixture();
    let fifo = root.join("events.txt");
    let created = Command::new("mkfifo")
        .arg(&fifo)
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    if !created {
        // mkfifo unavailable in this environment
        return;
    }

    let concurrent = walk(&root, &Config::default()).await.unwrap();
    let blocking = walk_blocking(&root, &Config::default()).unwrap();

    assert!(!concurrent.contains_key("events"));
    assert!(concurrent.contains_key("recipe"));
    assert_eq!(concurrent, blocking);
}

/// A dangling symlink fails the walk with the link's path
#[tokio::test]
async fn test_broken_symlink_fails_walk() {
    let (_temp_dir, root) = create_fixture();
    std::os::unix::fs::symlink(root.join("gone.txt"), root.join("dangling.txt")).unwrap();

    let errors = [
        walk(&root, &Config::default()).await.unwrap_err(),
        walk_blocking(&root, &Config::default()).unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, WalkError::Filesystem { .. }));
        assert!(err.is_not_found());
        assert!(err.path().unwrap().ends_with("dangling.txt"));
    }
}

/// A symlink to a directory is walked like the directory itself
#[tokio::test]
async fn test_directory_symlink_is_followed() {
    let (_temp_dir, root) = create_fixture();
    std::os::unix::fs::symlink(root.join("env"), root.join("linked")).unwrap();

    let concurrent = walk(&root, &Config::default()).await.unwrap();
    let blocking = walk_blocking(&root, &Config::default()).unwrap();

    assert_eq!(concurrent.get("linked"), concurrent.get("env"));
    assert_eq!(concurrent, blocking);
}

/// Names differing only in invalid UTF-8 collapse to one key, later name wins
#[tokio::test]
async fn test_non_utf8_names_collapse_deterministically() {
    let (_temp_dir, root) = create_fixture();
    let first = root.join(OsStr::from_bytes(b"dup\xfe.txt"));
    let second = root.join(OsStr::from_bytes(b"dup\xff.txt"));
    if fs::write(&first, "first").is_err() || fs::write(&second, "second").is_err() {
        // Filesystem rejects non-UTF-8 names
        return;
    }

    let concurrent = walk(&root, &Config::default()).await.unwrap();
    let blocking = walk_blocking(&root, &Config::default()).unwrap();

    assert_eq!(
        concurrent
            .get("dup\u{FFFD}")
            .and_then(Node::as_value)
            .and_then(Value::as_text),
        Some("second")
    );
    assert_eq!(concurrent, blocking);
}
