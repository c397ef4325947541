//! Root path resolution

use crate::error::WalkError;
use std::path::{Path, PathBuf};

/// Resolve the walk root to an absolute, canonical path
///
/// Decoders receive absolute paths, so the root is canonicalized once and
/// children are joined onto it. A missing root surfaces as a NotFound
/// filesystem error.
pub fn resolve_root(path: &Path) -> Result<PathBuf, WalkError> {
    dunce::canonicalize(path).map_err(|e| WalkError::filesystem(path, e))
}
