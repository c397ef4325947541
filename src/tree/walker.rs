//! Concurrent directory walker
//!
//! Each directory level fans out over its entries with `try_join_all`: stats,
//! decodes and subdirectory walks of siblings run concurrently and the level is
//! assembled once all of them finish. The first failure aborts assembly of the
//! level and propagates; decodes already running on the blocking pool finish
//! in the background and their results are dropped.
//!
//! Must be polled inside a tokio runtime.

use crate::config::Config;
use crate::decoder::{Decoder, Metadata};
use crate::error::WalkError;
use crate::tree::blocking;
use crate::tree::key::{extension_of, resolve_key};
use crate::tree::path::resolve_root;
use crate::tree::{ContentTree, Node};
use futures::future::{try_join_all, BoxFuture, FutureExt};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// What to do with one directory entry
pub(crate) enum EntryPlan<'a> {
    Recurse(String),
    Decode(String, &'a Decoder),
    Skip,
}

/// Classify an entry from its name and metadata. Shared by both walkers so
/// they agree on keys and skips.
pub(crate) fn plan_entry<'a>(
    name: &str,
    metadata: &Metadata,
    config: &'a Config,
) -> EntryPlan<'a> {
    if metadata.is_dir() {
        if !config.recursive {
            return EntryPlan::Skip;
        }
        return EntryPlan::Recurse(resolve_key(name, true, config.strip_extensions));
    }

    if !metadata.is_file() {
        return EntryPlan::Skip;
    }

    match config.registry.resolve_for(extension_of(name).as_deref()) {
        Some(decoder) => {
            EntryPlan::Decode(resolve_key(name, false, config.strip_extensions), decoder)
        }
        None => EntryPlan::Skip,
    }
}

/// Directory walker bound to a root path
pub struct Walker {
    root: PathBuf,
    config: Arc<Config>,
}

impl Walker {
    /// Create a walker with the default configuration
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: Arc::new(Config::default()),
        }
    }

    /// Create a walker with a custom configuration
    pub fn with_config(root: PathBuf, config: Config) -> Self {
        Self {
            root,
            config: Arc::new(config),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walk concurrently
    pub async fn walk(&self) -> Result<ContentTree, WalkError> {
        walk(&self.root, &self.config).await
    }

    /// Walk on the calling thread
    pub fn walk_blocking(&self) -> Result<ContentTree, WalkError> {
        blocking::walk_blocking(&self.root, &self.config)
    }
}

/// Materialize the tree under `root`, decoding files concurrently
pub async fn walk(root: impl AsRef<Path>, config: &Config) -> Result<ContentTree, WalkError> {
    walk_root(root.as_ref(), config).await
}

#[instrument(skip_all, fields(root = %root.display(), mode = "concurrent"))]
async fn walk_root(root: &Path, config: &Config) -> Result<ContentTree, WalkError> {
    let start = Instant::now();
    let root = resolve_root(root)?;

    let tree = walk_dir(root, config).await?;

    info!(
        entries = tree.len(),
        duration_ms = start.elapsed().as_millis(),
        "Walk completed"
    );
    Ok(tree)
}

fn walk_dir(dir: PathBuf, config: &Config) -> BoxFuture<'_, Result<ContentTree, WalkError>> {
    async move {
        let names = list_dir(&dir).await?;
        debug!(dir = %dir.display(), entry_count = names.len(), "Listed directory");

        let visits = names
            .into_iter()
            .map(|name| visit_entry(dir.join(&name), name, config));
        let results = try_join_all(visits).await?;

        Ok(ContentTree::from_entries(results))
    }
    .boxed()
}

/// Entry names of a directory, sorted
async fn list_dir(dir: &Path) -> Result<Vec<OsString>, WalkError> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| WalkError::filesystem(dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| WalkError::filesystem(dir, e))?
    {
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

async fn visit_entry(
    path: PathBuf,
    name: OsString,
    config: &Config,
) -> Result<Option<(String, Node)>, WalkError> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| WalkError::filesystem(&path, e))?;
    let name = name.to_string_lossy();

    match plan_entry(&name, &metadata, config) {
        EntryPlan::Recurse(key) => {
            let subtree = walk_dir(path, config).await?;
            Ok(Some((key, Node::Directory(subtree))))
        }
        EntryPlan::Decode(key, decoder) => {
            let value = decoder.decode(&path, &metadata).await?;
            trace!(path = %path.display(), key = %key, "Decoded file");
            Ok(Some((key, Node::Leaf(value))))
        }
        EntryPlan::Skip => {
            trace!(path = %path.display(), "Skipped entry");
            Ok(None)
        }
    }
}
