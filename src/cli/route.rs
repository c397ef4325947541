//! CLI route: run context built from settings and flags, dispatching to the
//! concurrent or blocking walker.

use crate::cli::parse::Cli;
use crate::config::{build_config, Config, SettingsLoader, WalkSettings};
use crate::error::{SettingsError, WalkError};
use crate::tree::blocking::walk_blocking;
use crate::tree::walker::walk;
use crate::tree::ContentTree;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for one CLI invocation
pub struct RunContext {
    path: PathBuf,
    settings: WalkSettings,
    config: Config,
    blocking: bool,
}

/// Apply command-line flags on top of loaded settings.
/// Flags override the settings file, which overrides defaults.
pub fn apply_cli_flags(settings: &mut WalkSettings, cli: &Cli) {
    if cli.no_recursive {
        settings.recursive = false;
    }
    if cli.keep_extensions {
        settings.strip_extensions = false;
    }
    if cli.binary_fallback {
        settings.binary_fallback = true;
    }
    settings.disabled_extensions.extend(cli.disable.iter().cloned());
    settings.text_extensions.extend(cli.text.iter().cloned());

    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        settings.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        settings.logging.format = format.clone();
    }
}

impl RunContext {
    /// Load settings (file, environment) and apply CLI flags
    pub fn new(cli: &Cli) -> Result<Self, SettingsError> {
        let mut settings = SettingsLoader::load(cli.config.as_deref())?;
        apply_cli_flags(&mut settings, cli);
        Self::from_settings(cli.path.clone(), settings, cli.blocking)
    }

    pub fn from_settings(
        path: PathBuf,
        settings: WalkSettings,
        blocking: bool,
    ) -> Result<Self, SettingsError> {
        let config = build_config(settings.to_overrides()?);
        Ok(Self {
            path,
            settings,
            config,
            blocking,
        })
    }

    pub fn settings(&self) -> &WalkSettings {
        &self.settings
    }

    /// Walk the target directory with the selected walker
    pub fn execute(&self) -> Result<ContentTree, WalkError> {
        if self.blocking {
            debug!("Using blocking walker");
            return walk_blocking(&self.path, &self.config);
        }

        debug!("Using concurrent walker");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| WalkError::Task(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(walk(&self.path, &self.config))
    }
}
