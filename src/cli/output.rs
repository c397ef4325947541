//! CLI output: tree rendering and error mapping.

use crate::error::WalkError;
use crate::tree::ContentTree;

/// Render a tree as JSON for stdout
pub fn render_tree(tree: &ContentTree, compact: bool) -> Result<String, serde_json::Error> {
    let json = tree.to_json();
    if compact {
        serde_json::to_string(&json)
    } else {
        serde_json::to_string_pretty(&json)
    }
}

/// Map walk errors to a string for CLI output.
pub fn map_error(e: &WalkError) -> String {
    match e {
        WalkError::Filesystem { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
            format!("No such file or directory: {}", path.display())
        }
        _ => e.to_string(),
    }
}
