//! Error types for directory content walks.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a decoder while turning a file into a value
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8 text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("module load failed: {0}")]
    Module(String),

    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl DecodeError {
    /// Wrap an arbitrary decoder-specific error
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        DecodeError::Custom(err.into())
    }
}

/// Walk errors. A walk yields either a complete tree or exactly one of these.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Decoder task failed: {0}")]
    Task(String),
}

impl WalkError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, source: DecodeError) -> Self {
        WalkError::Decode {
            path: path.into(),
            source,
        }
    }

    /// I/O error kind behind this failure, if it came from the filesystem
    /// or from a decoder's own read.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            WalkError::Filesystem { source, .. } => Some(source.kind()),
            WalkError::Decode {
                source: DecodeError::Io(e),
                ..
            } => Some(e.kind()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(std::io::ErrorKind::NotFound)
    }

    /// Path of the entry that failed
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            WalkError::Filesystem { path, .. } | WalkError::Decode { path, .. } => Some(path),
            WalkError::Task(_) => None,
        }
    }
}

/// Settings and logging setup errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid extension {0:?}: must be non-empty and must not contain '.' or '/'")]
    InvalidExtension(String),
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::Config(err.to_string())
    }
}
