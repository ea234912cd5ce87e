//! nutconf CLI
//!
//! Writes the options submitted by a management UI into the Network UPS
//! Tools configuration files.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    let result = if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
    };

    if result.is_err() {
        eprintln!("{}: tracing subscriber already set", "warning".yellow().bold());
    }
}

/// Returns `Ok(false)` when the command ran but the exit status must be 1.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(root = %cli.root.display(), "Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(&cli.root, cmd),
        None => {
            println!("{} Network UPS Tools configuration writer", "nutconf".green().bold());
            println!();
            println!("Run {} for available commands.", "nutconf --help".cyan());
            Ok(true)
        }
    }
}

fn execute_command(root: &Path, cmd: Commands) -> Result<bool> {
    match cmd {
        Commands::Apply { source, dry_run } => {
            commands::run_apply(root, &source, dry_run).map(|()| true)
        }
        Commands::Check { source, json } => commands::run_check(root, &source, json),
        Commands::Diff { source } => commands::run_diff(root, &source).map(|()| true),
        Commands::Show { json } => commands::run_show(root, json).map(|()| true),
        Commands::Routes => commands::run_routes().map(|()| true),
    }
}
