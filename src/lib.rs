//! Dircontents: Directory Trees as Nested Maps
//!
//! Reads a directory tree into a [`ContentTree`], decoding each file with the
//! decoder registered for its extension and nesting subdirectories as child
//! trees. Two walkers share one configuration: [`walk`] fans out per directory
//! on tokio, [`walk_blocking`] runs sequentially on the calling thread.
//!
//! ```no_run
//! use dircontents::{build_config, walk_blocking, ConfigOverrides};
//!
//! let config = build_config(ConfigOverrides::new().strip_extensions(false));
//! let tree = walk_blocking("config", &config)?;
//! println!("{}", tree.to_json());
//! # Ok::<(), dircontents::error::WalkError>(())
//! ```

pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod registry;
pub mod tree;

pub use config::{build_config, Config, ConfigOverrides};
pub use decoder::{AsyncDecode, BlockingDecode, Decoder, Metadata, ModuleLoader};
pub use error::{DecodeError, WalkError};
pub use registry::{Registry, WILDCARD};
pub use tree::blocking::walk_blocking;
pub use tree::walker::{walk, Walker};
pub use tree::{ContentTree, Node, Value};
