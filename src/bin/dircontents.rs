//! Dircontents CLI Binary
//!
//! Walks a directory and prints its decoded contents as JSON.

use anyhow::Context;
use clap::Parser;
use dircontents::cli::{map_error, render_tree, Cli, RunContext};
use dircontents::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let context = RunContext::new(cli).context("Failed to load settings")?;

    init_logging(Some(&context.settings().logging)).context("Failed to initialize logging")?;
    info!(path = %cli.path.display(), "dircontents starting");

    let tree = match context.execute() {
        Ok(tree) => tree,
        Err(e) => {
            error!("Walk failed: {}", e);
            anyhow::bail!(map_error(&e));
        }
    };

    let output = render_tree(&tree, cli.compact).context("Failed to render tree")?;
    println!("{}", output);
    Ok(())
}
