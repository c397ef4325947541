//! Merge rules: defaults, override order, conflict handling.
//!
//! Order (lowest to highest): built-in defaults, settings file, environment.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("recursive", true)?
        .set_default("strip_extensions", true)?
        .set_default("binary_fallback", false)
}
