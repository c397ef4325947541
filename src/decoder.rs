//! Decoder Abstraction
//!
//! A decoder turns one file (its absolute path plus filesystem metadata) into a
//! [`Value`]. Two execution contracts exist: [`BlockingDecode`] runs to
//! completion on the calling thread, [`AsyncDecode`] may suspend. The
//! [`Decoder`] tag records which contract a registration provides so both
//! walkers can invoke it uniformly:
//!
//! - the concurrent walker awaits async decoders directly and defers blocking
//!   ones onto tokio's blocking pool;
//! - the blocking walker calls blocking decoders directly and drives async-only
//!   decoders on a tokio runtime (the ambient one when called from inside a
//!   runtime, otherwise a current-thread runtime of its own), so decoders built
//!   on `tokio::fs` work in both walkers.
//!
//! Decoders that ignore metadata are adapted when they are constructed
//! ([`Decoder::blocking_fn`], [`Decoder::concurrent_fn`]), so every registered
//! decoder has the same `(path, metadata)` shape.

use crate::error::{DecodeError, WalkError};
use crate::tree::Value;
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::{Handle, RuntimeFlavor};

pub mod builtin;
pub mod module;

pub use builtin::{
    parse_json, parse_json_blocking, parse_toml, parse_toml_blocking, read_bytes,
    read_bytes_blocking, read_text, read_text_blocking, BytesDecoder, JsonDecoder, TextDecoder,
    TomlDecoder,
};
pub use module::{load_module, load_module_blocking, ModuleDecoder, ModuleLoader};

/// Filesystem metadata handed to decoders (symlinks already followed)
pub type Metadata = std::fs::Metadata;

/// Decoder that completes on the calling thread
pub trait BlockingDecode: Send + Sync {
    fn decode(&self, path: &Path, metadata: &Metadata) -> Result<Value, DecodeError>;
}

/// Decoder that may suspend
#[async_trait]
pub trait AsyncDecode: Send + Sync {
    async fn decode(&self, path: &Path, metadata: &Metadata) -> Result<Value, DecodeError>;
}

/// A registered decoder capability
#[derive(Clone)]
pub enum Decoder {
    Blocking(Arc<dyn BlockingDecode>),
    Concurrent(Arc<dyn AsyncDecode>),
    /// Both contracts, e.g. std::fs for blocking walks and tokio::fs for
    /// concurrent ones.
    Dual {
        blocking: Arc<dyn BlockingDecode>,
        concurrent: Arc<dyn AsyncDecode>,
    },
}

impl Decoder {
    pub fn blocking<D: BlockingDecode + 'static>(decoder: D) -> Self {
        Decoder::Blocking(Arc::new(decoder))
    }

    pub fn concurrent<D: AsyncDecode + 'static>(decoder: D) -> Self {
        Decoder::Concurrent(Arc::new(decoder))
    }

    pub fn dual<D: BlockingDecode + AsyncDecode + 'static>(decoder: D) -> Self {
        let decoder = Arc::new(decoder);
        Decoder::Dual {
            blocking: decoder.clone(),
            concurrent: decoder,
        }
    }

    /// Metadata-oblivious blocking closure
    pub fn blocking_fn<F>(f: F) -> Self
    where
        F: Fn(&Path) -> Result<Value, DecodeError> + Send + Sync + 'static,
    {
        Self::blocking_with_metadata(move |path, _metadata| f(path))
    }

    /// Metadata-aware blocking closure
    pub fn blocking_with_metadata<F>(f: F) -> Self
    where
        F: Fn(&Path, &Metadata) -> Result<Value, DecodeError> + Send + Sync + 'static,
    {
        Decoder::Blocking(Arc::new(BlockingFn(f)))
    }

    /// Metadata-oblivious async closure
    pub fn concurrent_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(PathBuf) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, DecodeError>> + Send + 'static,
    {
        Self::concurrent_with_metadata(move |path, _metadata| f(path))
    }

    /// Metadata-aware async closure
    pub fn concurrent_with_metadata<F, Fut>(f: F) -> Self
    where
        F: Fn(PathBuf, Metadata) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, DecodeError>> + Send + 'static,
    {
        Decoder::Concurrent(Arc::new(ConcurrentFn(f)))
    }

    /// Invoke from the concurrent walker
    pub(crate) async fn decode(&self, path: &Path, metadata: &Metadata) -> Result<Value, WalkError> {
        match self {
            Decoder::Concurrent(decoder) | Decoder::Dual { concurrent: decoder, .. } => decoder
                .decode(path, metadata)
                .await
                .map_err(|e| WalkError::decode(path, e)),
            Decoder::Blocking(decoder) => {
                let decoder = Arc::clone(decoder);
                let owned_path = path.to_path_buf();
                let metadata = metadata.clone();
                tokio::task::spawn_blocking(move || decoder.decode(&owned_path, &metadata))
                    .await
                    .map_err(|e| WalkError::Task(format!("{:?}: {}", path, e)))?
                    .map_err(|e| WalkError::decode(path, e))
            }
        }
    }

    /// Invoke from the blocking walker
    pub(crate) fn decode_blocking(&self, path: &Path, metadata: &Metadata) -> Result<Value, WalkError> {
        let result = match self {
            Decoder::Blocking(decoder) | Decoder::Dual { blocking: decoder, .. } => {
                decoder.decode(path, metadata)
            }
            Decoder::Concurrent(decoder) => drive_async(decoder.as_ref(), path, metadata)?,
        };
        result.map_err(|e| WalkError::decode(path, e))
    }
}

/// Run an async decoder to completion from synchronous code
fn drive_async(
    decoder: &dyn AsyncDecode,
    path: &Path,
    metadata: &Metadata,
) -> Result<Result<Value, DecodeError>, WalkError> {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => Ok(
            tokio::task::block_in_place(|| handle.block_on(decoder.decode(path, metadata))),
        ),
        // A current-thread runtime cannot be blocked from its own thread
        Ok(_) => std::thread::scope(|scope| {
            scope
                .spawn(|| run_on_local_runtime(decoder, path, metadata))
                .join()
                .map_err(|_| WalkError::Task(format!("{:?}: decoder thread panicked", path)))?
        }),
        Err(_) => run_on_local_runtime(decoder, path, metadata),
    }
}

fn run_on_local_runtime(
    decoder: &dyn AsyncDecode,
    path: &Path,
    metadata: &Metadata,
) -> Result<Result<Value, DecodeError>, WalkError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| WalkError::Task(format!("{:?}: failed to start runtime: {}", path, e)))?;
    Ok(runtime.block_on(decoder.decode(path, metadata)))
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Decoder::Blocking(_) => "Blocking",
            Decoder::Concurrent(_) => "Concurrent",
            Decoder::Dual { .. } => "Dual",
        };
        write!(f, "Decoder::{}", kind)
    }
}

struct BlockingFn<F>(F);

impl<F> BlockingDecode for BlockingFn<F>
where
    F: Fn(&Path, &Metadata) -> Result<Value, DecodeError> + Send + Sync,
{
    fn decode(&self, path: &Path, metadata: &Metadata) -> Result<Value, DecodeError> {
        (self.0)(path, metadata)
    }
}

struct ConcurrentFn<F>(F);

#[async_trait]
impl<F, Fut> AsyncDecode for ConcurrentFn<F>
where
    F: Fn(PathBuf, Metadata) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, DecodeError>> + Send,
{
    async fn decode(&self, path: &Path, metadata: &Metadata) -> Result<Value, DecodeError> {
        (self.0)(path.to_path_buf(), metadata.clone()).await
    }
}
