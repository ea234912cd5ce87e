//! Rewriting one NUT file from its option map
//!
//! Per file: read the current text, locate or create the begin marker, keep
//! the prefix, render the block, then swap the file atomically.

use std::path::Path;

use serde::{Deserialize, Serialize};

use nut_blocks::{has_block, upsert_block};
use nut_fs::io;

use crate::Result;
use crate::options::FileOptions;

/// What happened to a file during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    /// The file was rewritten with a new autogenerated block
    Updated,
    /// The file already held exactly the rendered block
    Unchanged,
    /// The file had nothing to receive and no block to clear
    Skipped,
}

/// The text `options` turn `current` into, or `None` if the file should be
/// left alone.
///
/// A file without options is only touched when it already carries a block,
/// which is then emptied.
pub fn render_file(current: Option<&str>, options: &FileOptions) -> Option<String> {
    if options.is_empty() && !current.is_some_and(has_block) {
        return None;
    }
    Some(upsert_block(current.unwrap_or_default(), &options.render_lines()))
}

/// Update the autogenerated block of the file at `path`.
///
/// A file that must receive options has to exist; a missing one is reported
/// as the underlying `NotFound` I/O error.
pub fn write_file(path: &Path, options: &FileOptions) -> Result<FileOutcome> {
    let current = if options.is_empty() {
        match io::read_text_if_exists(path)? {
            Some(current) => current,
            None => {
                tracing::debug!(path = %path.display(), "no options and no file; skipping");
                return Ok(FileOutcome::Skipped);
            }
        }
    } else {
        io::read_text(path)?
    };

    let Some(rendered) = render_file(Some(&current), options) else {
        tracing::debug!(path = %path.display(), "no options and no block; skipping");
        return Ok(FileOutcome::Skipped);
    };

    if rendered == current {
        tracing::debug!(path = %path.display(), "autogenerated block already current");
        return Ok(FileOutcome::Unchanged);
    }

    io::write_text(path, &rendered)?;
    tracing::info!(path = %path.display(), options = options.len(), "updated NUT config");
    Ok(FileOutcome::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_without_block_render_nothing() {
        assert_eq!(render_file(Some("# stock\n"), &FileOptions::new()), None);
        assert_eq!(render_file(None, &FileOptions::new()), None);
    }

    #[test]
    fn empty_options_clear_existing_block() {
        let mut options = FileOptions::new();
        options.insert_assignment("MODE", "standalone");
        let with_block = render_file(Some("# stock\n"), &options).unwrap();

        let cleared = render_file(Some(&with_block), &FileOptions::new()).unwrap();
        assert!(cleared.starts_with("# stock\n####BEGIN"));
        assert!(!cleared.contains("MODE"));
    }
}
