//! Key resolution for directory entries

use std::path::Path;

/// Derive the tree key for an entry name
///
/// Directories keep their bare name. Files lose their final extension when
/// `strip_extensions` is set: `a.tar.gz` becomes `a.tar`, while dotfiles such
/// as `.gitignore` have no extension and keep their name.
///
/// Keys are strings, so the walkers pass entry names through
/// `to_string_lossy` first. Two names that differ only in invalid UTF-8 bytes
/// map to the same key; the later one in sorted name order wins and a warning
/// is logged.
pub fn resolve_key(file_name: &str, is_directory: bool, strip_extensions: bool) -> String {
    let path = Path::new(file_name);
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| file_name.into());

    if is_directory || !strip_extensions {
        return base.into_owned();
    }

    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => base.into_owned(),
    }
}

/// Final extension of a file name without the leading dot, if any
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
}
