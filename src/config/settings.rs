//! File and environment driven walk settings
//!
//! Used by the CLI and by hosts that want their walk options in a config
//! file rather than in code.

use super::merge::merge_policy;
use super::sources::{environment, settings_file};
use super::ConfigOverrides;
use crate::decoder::{BytesDecoder, Decoder, TextDecoder};
use crate::error::SettingsError;
use crate::logging::LoggingConfig;
use crate::registry::{normalize_extension, WILDCARD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable walk settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkSettings {
    #[serde(default = "default_true")]
    pub recursive: bool,

    #[serde(default = "default_true")]
    pub strip_extensions: bool,

    /// Decode unmatched extensions as raw bytes
    #[serde(default)]
    pub binary_fallback: bool,

    /// Extensions to skip even when a default decoder exists
    #[serde(default)]
    pub disabled_extensions: Vec<String>,

    /// Extra extensions decoded as UTF-8 text
    #[serde(default)]
    pub text_extensions: Vec<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            recursive: true,
            strip_extensions: true,
            binary_fallback: false,
            disabled_extensions: Vec::new(),
            text_extensions: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WalkSettings {
    /// Reject extension names that can never match a file
    pub fn validate(&self) -> Result<(), SettingsError> {
        for ext in self.disabled_extensions.iter().chain(&self.text_extensions) {
            let normalized = normalize_extension(ext);
            if normalized.is_empty()
                || normalized == WILDCARD
                || normalized.contains(['.', '/', '\\'])
            {
                return Err(SettingsError::InvalidExtension(ext.clone()));
            }
        }
        Ok(())
    }

    /// Overrides for [`super::build_config`]. Disabled extensions win over
    /// text extensions naming the same key.
    pub fn to_overrides(&self) -> Result<ConfigOverrides, SettingsError> {
        self.validate()?;

        let mut overrides = ConfigOverrides::new()
            .recursive(self.recursive)
            .strip_extensions(self.strip_extensions);

        if self.binary_fallback {
            overrides = overrides.extension(WILDCARD, Decoder::dual(BytesDecoder));
        }
        for ext in &self.text_extensions {
            overrides = overrides.extension(ext, Decoder::dual(TextDecoder));
        }
        for ext in &self.disabled_extensions {
            overrides = overrides.disable(ext);
        }
        Ok(overrides)
    }
}

/// Loads [`WalkSettings`] from defaults, a settings file and the environment
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings; `file` must exist when given.
    pub fn load(file: Option<&Path>) -> Result<WalkSettings, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = settings_file::add_to_builder(builder, file)?;
        let builder = environment::add_to_builder(builder);

        let settings: WalkSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a single file, without environment overrides
    pub fn load_from_file(file: &Path) -> Result<WalkSettings, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = settings_file::add_to_builder(builder, Some(file))?;

        let settings: WalkSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}
