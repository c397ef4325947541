//! Module loading capability
//!
//! Loading a file as an executable or data module is a host concern. The
//! crate never inspects or runs code itself; a trusted [`ModuleLoader`]
//! supplied by the application does. Loaders are blocking by construction;
//! the concurrent walker defers them onto tokio's blocking pool.

use super::{BlockingDecode, Metadata};
use crate::error::DecodeError;
use crate::tree::Value;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Host-supplied module loader
pub trait ModuleLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Value, DecodeError>;
}

impl<F> ModuleLoader for F
where
    F: Fn(&Path) -> Result<Value, DecodeError> + Send + Sync,
{
    fn load(&self, path: &Path) -> Result<Value, DecodeError> {
        self(path)
    }
}

/// Decoder adapter over a [`ModuleLoader`]
#[derive(Clone)]
pub struct ModuleDecoder {
    loader: Arc<dyn ModuleLoader>,
}

impl ModuleDecoder {
    pub fn new(loader: Arc<dyn ModuleLoader>) -> Self {
        Self { loader }
    }
}

impl fmt::Debug for ModuleDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModuleDecoder")
    }
}

impl BlockingDecode for ModuleDecoder {
    fn decode(&self, path: &Path, _metadata: &Metadata) -> Result<Value, DecodeError> {
        self.loader.load(path)
    }
}

pub fn load_module_blocking(loader: &dyn ModuleLoader, path: &Path) -> Result<Value, DecodeError> {
    loader.load(path)
}

/// Deferred invocation of a blocking loader
pub async fn load_module(loader: Arc<dyn ModuleLoader>, path: &Path) -> Result<Value, DecodeError> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || loader.load(&path))
        .await
        .map_err(|e| DecodeError::Module(format!("loader task failed: {}", e)))?
}
