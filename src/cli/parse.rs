//! CLI parse: clap types for dircontents. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Print a directory tree as nested JSON, decoding files by extension
#[derive(Parser, Debug)]
#[command(name = "dircontents")]
#[command(about = "Print a directory tree as nested JSON, decoding files by extension")]
pub struct Cli {
    /// Directory to walk
    pub path: PathBuf,

    /// Settings file path (default: ./dircontents.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Walk sequentially on the calling thread
    #[arg(long)]
    pub blocking: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Keep file extensions in keys
    #[arg(long)]
    pub keep_extensions: bool,

    /// Decode files with unmatched extensions as raw bytes
    #[arg(long)]
    pub binary_fallback: bool,

    /// Skip files with this extension (repeatable)
    #[arg(long = "disable", value_name = "EXT")]
    pub disable: Vec<String>,

    /// Decode files with this extension as UTF-8 text (repeatable)
    #[arg(long = "text", value_name = "EXT")]
    pub text: Vec<String>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
