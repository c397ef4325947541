//! Environment source: `DIRCONTENTS_RECURSIVE`, `DIRCONTENTS_STRIP_EXTENSIONS`, ...

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "DIRCONTENTS";

/// Settings whose environment values are comma-separated lists
const LIST_KEYS: [&str; 2] = ["disabled_extensions", "text_extensions"];

/// Add environment overrides to the builder. Nested keys use `__`
/// (`DIRCONTENTS_LOGGING__LEVEL=debug`), list keys use commas
/// (`DIRCONTENTS_TEXT_EXTENSIONS=md,csv`).
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(source())
}

fn source() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}
