//! Integration tests for directory content walks

mod cli_settings;
mod decoder_overrides;
mod error_propagation;
mod special_entries;
mod test_utils;
