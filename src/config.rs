//! Configuration System
//!
//! [`build_config`] turns caller overrides into an immutable walk [`Config`]:
//! built-in default decoders first, then the host module loader, then caller
//! extension entries, each replacing only the key it names. File and
//! environment driven settings for the CLI live in [`settings`].

use crate::decoder::{Decoder, JsonDecoder, ModuleDecoder, ModuleLoader, TextDecoder, TomlDecoder};
use crate::registry::{normalize_extension, Registry};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

mod merge;
pub mod settings;
mod sources;

pub use settings::{SettingsLoader, WalkSettings};

/// Extension the host module loader is registered under
pub const MODULE_EXTENSION: &str = "js";

/// Walk configuration. Immutable once a walk begins.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: Registry,
    /// Descend into subdirectories (default: true)
    pub recursive: bool,
    /// Drop the final extension from file keys (default: true)
    pub strip_extensions: bool,
}

impl Default for Config {
    fn default() -> Self {
        build_config(ConfigOverrides::default())
    }
}

/// Caller-supplied overrides, merged over the defaults by [`build_config`]
#[derive(Clone, Default)]
pub struct ConfigOverrides {
    /// Extension entries keyed by normalized extension; `None` disables.
    pub extensions: BTreeMap<String, Option<Decoder>>,
    pub recursive: Option<bool>,
    pub strip_extensions: Option<bool>,
    /// Trusted loader for `.js` modules. Without one, `.js` has no default.
    pub module_loader: Option<Arc<dyn ModuleLoader>>,
    /// Start from an empty registry instead of the built-in decoders
    pub replace_default_extensions: bool,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extension(mut self, extension: &str, decoder: Decoder) -> Self {
        self.extensions
            .insert(normalize_extension(extension), Some(decoder));
        self
    }

    pub fn disable(mut self, extension: &str) -> Self {
        self.extensions.insert(normalize_extension(extension), None);
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    pub fn strip_extensions(mut self, strip: bool) -> Self {
        self.strip_extensions = Some(strip);
        self
    }

    pub fn module_loader(mut self, loader: Arc<dyn ModuleLoader>) -> Self {
        self.module_loader = Some(loader);
        self
    }

    pub fn replace_default_extensions(mut self) -> Self {
        self.replace_default_extensions = true;
        self
    }
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("extensions", &self.extensions)
            .field("recursive", &self.recursive)
            .field("strip_extensions", &self.strip_extensions)
            .field("module_loader", &self.module_loader.is_some())
            .field("replace_default_extensions", &self.replace_default_extensions)
            .finish()
    }
}

/// Built-in decoders: `json`, `toml` and `txt`. No wildcard fallback.
pub fn default_registry() -> Registry {
    Registry::new()
        .with("json", Some(Decoder::dual(JsonDecoder)))
        .with("toml", Some(Decoder::dual(TomlDecoder)))
        .with("txt", Some(Decoder::dual(TextDecoder)))
}

/// Merge overrides onto the defaults. Pure; no global state.
pub fn build_config(overrides: ConfigOverrides) -> Config {
    let mut registry = if overrides.replace_default_extensions {
        Registry::new()
    } else {
        default_registry()
    };

    if let Some(loader) = overrides.module_loader {
        registry.set(
            MODULE_EXTENSION,
            Some(Decoder::blocking(ModuleDecoder::new(loader))),
        );
    }

    for (extension, decoder) in overrides.extensions {
        registry.set(&extension, decoder);
    }

    Config {
        registry,
        recursive: overrides.recursive.unwrap_or(true),
        strip_extensions: overrides.strip_extensions.unwrap_or(true),
    }
}
