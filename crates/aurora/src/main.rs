//! Aurora CLI - scaffolding for Aurora Editor extensions, profiles and projects
//!
//! This is the main entry point for the Aurora command-line interface.

mod cli;
mod commands;
mod output;
mod prompts;
mod utils;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::with_error_handling;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run the command on its own task so a signal can interrupt it
    let command = tokio::spawn(dispatch(cli.command));

    tokio::select! {
        joined = command => {
            if let Err(e) = joined {
                tracing::error!("Command task failed: {}", e);
            }
        }
        signal = shutdown_signal() => {
            eprintln!(
                "{}",
                style(format!("\nReceived {}. Gracefully shutting down...", signal)).yellow()
            );
            std::process::exit(0);
        }
    }

    Ok(())
}

/// Route a parsed command through the error-handling middleware
async fn dispatch(command: Commands) {
    match command {
        Commands::Extension(args) => with_error_handling(commands::extension::run(args)).await,
        Commands::Profile(args) => with_error_handling(commands::profile::run(args)).await,
        Commands::Project(args) => with_error_handling(commands::project::run(args)).await,
        Commands::Help(args) => with_error_handling(async { commands::help::run(args) }).await,
    }
}

/// Resolve with the name of the first termination signal received
async fn shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = interrupt() => "SIGINT",
                    _ = sigterm.recv() => "SIGTERM",
                }
            }
            Err(e) => {
                tracing::debug!("Cannot listen for SIGTERM: {}", e);
                interrupt().await;
                "SIGINT"
            }
        }
    }

    #[cfg(not(unix))]
    {
        interrupt().await;
        "SIGINT"
    }
}

/// Ctrl+C; never resolves if the handler cannot be installed
async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::debug!("Cannot listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
