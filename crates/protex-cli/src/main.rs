mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🧬 protex CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = PartialConfig::load(cli.config.as_deref(), &cli.set_values).and_then(
        |config| match cli.command {
            Commands::Ranges(args) => {
                info!("Dispatching to 'ranges' command.");
                commands::ranges::run(args)
            }
            Commands::Check(args) => {
                info!("Dispatching to 'check' command.");
                commands::check::run(args, config)
            }
            Commands::Genes(args) => {
                info!("Dispatching to 'genes' command.");
                commands::genes::run(args)
            }
            Commands::Search(args) => {
                info!("Dispatching to 'search' command.");
                commands::search::run(args)
            }
        },
    );

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
