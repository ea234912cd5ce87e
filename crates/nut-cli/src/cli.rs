//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nutconf - Write Network UPS Tools configuration from form options
#[derive(Parser, Debug)]
#[command(name = "nutconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Filesystem root the /etc/ups paths are resolved under
    #[arg(long, global = true, env = "NUTCONF_ROOT", default_value = "/")]
    pub root: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the option dictionary comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSource {
    /// Read options from a flat TOML, JSON or YAML file
    #[arg(short, long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Set an option; repeatable, applied after --from in order
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the options into the NUT configuration files
    ///
    /// Examples:
    ///   nutconf apply --set MODE=netserver
    ///   nutconf apply --from ups.toml
    ///   nutconf apply --from ups.toml --dry-run
    Apply {
        #[command(flatten)]
        source: OptionSource,

        /// Print the pending changes instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Check whether the files already hold the given options
    ///
    /// Exits with status 1 when a file has drifted or is missing.
    Check {
        #[command(flatten)]
        source: OptionSource,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the unified diff an apply would produce
    Diff {
        #[command(flatten)]
        source: OptionSource,
    },

    /// Show the options currently in each file's autogenerated block
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List which options are written to which file
    Routes,
}
