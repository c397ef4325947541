//! Blocking directory walker
//!
//! Same traversal as [`super::walker`], one entry at a time on the calling
//! thread. Given the same inputs and pure decoders both walkers produce equal
//! trees.
//!
//! Each level is listed with `walkdir` at depth one, sorted by file name and
//! following symlinks, to match the stat the concurrent walker performs.

use crate::config::Config;
use crate::error::WalkError;
use crate::tree::path::resolve_root;
use crate::tree::walker::{plan_entry, EntryPlan};
use crate::tree::{ContentTree, Node};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};
use walkdir::{DirEntry, WalkDir};

/// Materialize the tree under `root` without suspending
pub fn walk_blocking(root: impl AsRef<Path>, config: &Config) -> Result<ContentTree, WalkError> {
    walk_root(root.as_ref(), config)
}

#[instrument(skip_all, fields(root = %root.display(), mode = "blocking"))]
fn walk_root(root: &Path, config: &Config) -> Result<ContentTree, WalkError> {
    let start = Instant::now();
    let root = resolve_root(root)?;
    // walkdir yields no children for a file root instead of failing
    std::fs::read_dir(&root).map_err(|e| WalkError::filesystem(&root, e))?;

    let tree = walk_dir(&root, config)?;

    info!(
        entries = tree.len(),
        duration_ms = start.elapsed().as_millis(),
        "Walk completed"
    );
    Ok(tree)
}

fn walk_dir(dir: &Path, config: &Config) -> Result<ContentTree, WalkError> {
    let entries = list_dir(dir)?;
    debug!(dir = %dir.display(), entry_count = entries.len(), "Listed directory");

    let mut tree = ContentTree::new();
    for entry in entries {
        let path = entry.path();
        let metadata = entry.metadata().map_err(|e| filesystem_error(path, e))?;
        let name = entry.file_name().to_string_lossy();

        match plan_entry(&name, &metadata, config) {
            EntryPlan::Recurse(key) => {
                let subtree = walk_dir(path, config)?;
                tree.insert(key, Node::Directory(subtree));
            }
            EntryPlan::Decode(key, decoder) => {
                let value = decoder.decode_blocking(path, &metadata)?;
                trace!(path = %path.display(), key = %key, "Decoded file");
                tree.insert(key, Node::Leaf(value));
            }
            EntryPlan::Skip => trace!(path = %path.display(), "Skipped entry"),
        }
    }

    Ok(tree)
}

/// Immediate children of `dir`, sorted by file name, symlinks followed
fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, WalkError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| filesystem_error(dir, e)))
        .collect()
}

/// Keep the underlying `io::ErrorKind` when walkdir has one
fn filesystem_error(fallback: &Path, err: walkdir::Error) -> WalkError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
    WalkError::filesystem(path, source)
}
