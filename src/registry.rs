//! Decoder Registry
//!
//! Maps lowercased file extensions (no leading dot) to decoders, plus an
//! optional wildcard fallback registered under [`WILDCARD`].

use crate::decoder::Decoder;
use std::collections::BTreeMap;

/// Registry key for the fallback decoder
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone)]
enum Slot {
    Decoder(Decoder),
    /// Explicitly disabled: resolves to nothing, even with a fallback.
    Disabled,
}

/// Extension-keyed decoder lookup
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: BTreeMap<String, Slot>,
    fallback: Option<Decoder>,
}

/// Lowercase and drop a leading `.`
pub fn normalize_extension(extension: &str) -> String {
    extension
        .strip_prefix('.')
        .unwrap_or(extension)
        .to_lowercase()
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder, or disable the extension with `None`.
    ///
    /// `"*"` sets or clears the fallback. Either way the entry replaces any
    /// previous one for the same key and leaves other keys untouched.
    pub fn set(&mut self, extension: &str, decoder: Option<Decoder>) {
        let key = normalize_extension(extension);
        if key == WILDCARD {
            self.fallback = decoder;
            return;
        }
        let slot = match decoder {
            Some(decoder) => Slot::Decoder(decoder),
            None => Slot::Disabled,
        };
        self.slots.insert(key, slot);
    }

    pub fn with(mut self, extension: &str, decoder: Option<Decoder>) -> Self {
        self.set(extension, decoder);
        self
    }

    /// Decoder for an extension, falling back to the wildcard.
    ///
    /// Returns `None` when the extension is disabled or nothing matches; the
    /// entry is then skipped.
    pub fn resolve(&self, extension: &str) -> Option<&Decoder> {
        match self.slots.get(&normalize_extension(extension)) {
            Some(Slot::Decoder(decoder)) => Some(decoder),
            Some(Slot::Disabled) => None,
            None => self.fallback.as_ref(),
        }
    }

    /// Decoder for a file that may have no extension at all
    pub fn resolve_for(&self, extension: Option<&str>) -> Option<&Decoder> {
        match extension {
            Some(ext) => self.resolve(ext),
            None => self.fallback.as_ref(),
        }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Extensions with an active decoder, sorted
    pub fn extensions(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|(_, slot)| matches!(slot, Slot::Decoder(_)))
            .map(|(ext, _)| ext.as_str())
            .collect()
    }
}
