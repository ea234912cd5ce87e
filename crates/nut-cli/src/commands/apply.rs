//! Apply and diff command implementations

use std::path::Path;

use colored::Colorize;

use nut_core::{FileOutcome, FilePreview, NutEngine, NutLayout, RawOptions};

use crate::cli::OptionSource;
use crate::error::Result;

use super::options::collect_options;

fn warn_unrouted(unrouted: &[String]) {
    for name in unrouted {
        eprintln!(
            "{} option '{}' is not used by any NUT file; ignored",
            "warning:".yellow().bold(),
            name
        );
    }
}

/// Run the apply command
pub fn run_apply(root: &Path, source: &OptionSource, dry_run: bool) -> Result<()> {
    let options = collect_options(source)?;
    let engine = NutEngine::new(NutLayout::new(root));

    if dry_run {
        println!("{} Dry run: no files will be written", "=>".blue().bold());
        return print_previews(&engine, &options);
    }

    println!("{} Writing NUT configuration...", "=>".blue().bold());

    let report = engine.apply(&options)?;
    warn_unrouted(&report.unrouted);

    for item in &report.files {
        let (tag, note) = match item.outcome {
            FileOutcome::Updated => ("updated".green().bold(), ""),
            FileOutcome::Unchanged => ("unchanged".dimmed(), ""),
            FileOutcome::Skipped => ("skipped".dimmed(), " (no options)"),
        };
        println!("   {:<10} {}{}", tag, item.path.display(), note.dimmed());
    }

    let updated = report.updated().count();
    println!();
    println!("{} {} file(s) updated.", "OK".green().bold(), updated);
    Ok(())
}

/// Run the diff command
pub fn run_diff(root: &Path, source: &OptionSource) -> Result<()> {
    let options = collect_options(source)?;
    let engine = NutEngine::new(NutLayout::new(root));
    print_previews(&engine, &options)
}

fn print_previews(engine: &NutEngine, options: &RawOptions) -> Result<()> {
    warn_unrouted(engine.route(options).unrouted());

    let previews = engine.preview(options)?;
    let changed: Vec<&FilePreview> = previews.iter().filter(|p| p.has_changes()).collect();

    if changed.is_empty() {
        println!("{} Nothing to change.", "OK".green().bold());
        return Ok(());
    }

    for preview in changed {
        if preview.is_missing() {
            println!(
                "{} {} does not exist; apply would fail",
                "MISSING".yellow().bold(),
                preview.path.display().to_string().cyan()
            );
            continue;
        }
        print_diff(&preview.unified_diff());
    }

    Ok(())
}

fn print_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}
