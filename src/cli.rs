//! CLI domain: parse, route and output only.

mod output;
mod parse;
mod route;

pub use output::{map_error, render_tree};
pub use parse::Cli;
pub use route::{apply_cli_flags, RunContext};
