//! Check command implementation

use std::path::Path;

use colored::Colorize;

use nut_core::{CheckStatus, FileState, NutEngine, NutLayout};

use crate::cli::OptionSource;
use crate::error::Result;

use super::options::collect_options;

/// Run the check command.
///
/// Returns `false` when any file has drifted or is missing.
pub fn run_check(root: &Path, source: &OptionSource, json: bool) -> Result<bool> {
    let options = collect_options(source)?;
    let engine = NutEngine::new(NutLayout::new(root));
    let report = engine.check(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.is_healthy());
    }

    println!("{} Checking NUT configuration...", "=>".blue().bold());

    for item in &report.files {
        let tag = match item.state {
            FileState::InSync => "ok".green(),
            FileState::Drifted => "drifted".yellow().bold(),
            FileState::Missing => "missing".red().bold(),
        };
        println!("   {:<8} {}", tag, item.path.display());
    }

    for name in &report.unrouted {
        println!("   {:<8} {}", "ignored".dimmed(), name);
    }

    println!();
    match report.status {
        CheckStatus::Healthy => {
            println!("{} All files are up to date.", "OK".green().bold());
        }
        CheckStatus::Drifted => {
            println!("{} Files have drifted from the given options.", "DRIFTED".yellow().bold());
            println!("   Run {} to update them.", "nutconf apply".cyan());
        }
        CheckStatus::Missing => {
            println!("{} Some configuration files do not exist.", "MISSING".red().bold());
            println!("   Install the NUT packages before applying.");
        }
    }

    Ok(report.is_healthy())
}
