//! Settings file source: an explicit TOML file, or `dircontents.toml` in the
//! current directory when present.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory when no file is given
pub const DEFAULT_SETTINGS_FILE: &str = "dircontents.toml";

/// Add the settings file to the builder.
///
/// An explicitly named file must exist; the implicit default is optional.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    explicit: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    if !required && !path.exists() {
        return Ok(builder);
    }

    debug!(settings_file = %path.display(), "Loading settings file");
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(required)))
}
