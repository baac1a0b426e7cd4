// ABOUTME: Entry point for the republish CLI application.
// ABOUTME: Parses arguments, sets up logging, and dispatches to command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use republish::config;
use republish::error::Result;
use republish::output::{Output, OutputMode};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = dispatch(cli, mode).await {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli, mode: OutputMode) -> Result<()> {
    let cwd = env::current_dir()?;
    let output = Output::new(mode);

    match cli.command {
        Commands::Init { force } => {
            config::init_config(&cwd, force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Run(args) => {
            let config = commands::resolve_config(&cwd, cli.config.as_deref(), args.into())?;
            commands::run(config, output).await
        }
        Commands::Plan(args) => {
            let config = commands::resolve_config(&cwd, cli.config.as_deref(), args.into())?;
            commands::plan(config, output)
        }
    }
}
