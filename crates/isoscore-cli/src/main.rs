mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use isoscore::engine::progress::ProgressReporter;
use isoscore::workflows::evaluator::IsotopeEvaluator;
use std::io::Write;
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
    eyre_hook
        .install()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install error hook: {}", e)))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("isoscore CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        if num_threads == 0 {
            return Err(CliError::Argument(
                "--threads must be at least 1".to_string(),
            ));
        }
        info!("Setting Rayon global thread pool to {} threads.", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let window = match &cli.command {
        Commands::Medical(args) => (args.window_lower, args.window_upper),
        _ => (None, None),
    };
    let evaluator = IsotopeEvaluator::new(config::build_config(&cli.evaluator, window)?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command_result = match cli.command {
        Commands::Energy(args) => {
            info!("Dispatching to 'energy' command.");
            commands::energy::run(args, &evaluator, &mut out)
        }
        Commands::Stability(args) => {
            info!("Dispatching to 'stability' command.");
            commands::stability::run(args, &evaluator, &mut out)
        }
        Commands::Medical(args) => {
            info!("Dispatching to 'medical' command.");
            let progress_handler = if cli.quiet {
                CliProgressHandler::hidden()
            } else {
                CliProgressHandler::new()
            };
            let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
            commands::medical::run(args, &evaluator, &reporter, &mut out)
        }
        Commands::Validate(args) => {
            info!("Dispatching to 'validate' command.");
            commands::validate::run(args, &evaluator, &mut out)
        }
    };
    out.flush()?;

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
