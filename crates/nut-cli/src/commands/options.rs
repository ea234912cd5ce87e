//! Building the option dictionary from command-line sources

use nut_core::RawOptions;
use nut_fs::OptionsStore;

use crate::cli::OptionSource;
use crate::error::{CliError, Result};

/// Split a `KEY=VALUE` argument at the first `=`.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::user(format!(
            "Invalid option '{}': expected KEY=VALUE",
            arg
        ))),
    }
}

/// Load `--from`, then apply each `--set` in order.
///
/// A `--set` for a key already present replaces its value but keeps its
/// position.
pub fn collect_options(source: &OptionSource) -> Result<RawOptions> {
    let mut options = match &source.from {
        Some(path) => OptionsStore::new().load(path)?,
        None => RawOptions::new(),
    };

    for arg in &source.set {
        let (key, value) = parse_assignment(arg)?;
        options.insert(key, value);
    }

    if options.is_empty() {
        return Err(CliError::user(
            "No options given. Use --from FILE or --set KEY=VALUE.",
        ));
    }

    tracing::debug!(count = options.len(), "collected options");
    Ok(options)
}
