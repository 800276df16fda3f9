mod cli;
mod logging;
mod reporter;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use dotenv::dotenv;
use flatten_dirs::Flattener;
use reporter::CliReporter;
use std::env;
use std::process;
use tracing::{debug, error};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    if let Err(err) = run(&args) {
        error!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let config = flatten_dirs::config::load_configuration()
        .context("Error loading configuration")?;
    let config = args.apply(config);
    debug!("config: {:?}", config);

    let root = match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Error reading current directory")?,
    };

    let flattener = Flattener::new(root, config);
    let reporter = CliReporter::new();
    flattener
        .run(&reporter)
        .with_context(|| format!("Error flattening {}", flattener.root().display()))?;

    Ok(())
}
