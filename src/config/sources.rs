//! Settings sources

pub mod environment;
pub mod settings_file;
