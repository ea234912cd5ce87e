//! NutEngine implementation
//!
//! The NutEngine ties the router to the file writer for one filesystem root.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use nut_blocks::parse_block;
use nut_fs::io;

use crate::layout::NutLayout;
use crate::options::FileOptions;
use crate::router::{RoutedConfig, Router};
use crate::table::NutFile;
use crate::writer::{self, FileOutcome};
use crate::{RawOptions, Result};

use super::check::{CheckReport, FileCheck, FileState};
use super::preview::FilePreview;

/// Outcome for a single file of an apply run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: NutFile,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Report from an apply run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    /// One entry per file, in write order
    pub files: Vec<FileReport>,
    /// Input option names no file recognizes
    pub unrouted: Vec<String>,
}

impl ApplyReport {
    /// Files whose content changed.
    pub fn updated(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|r| r.outcome == FileOutcome::Updated)
    }
}

/// Engine for writing NUT configuration under one root
///
/// - **apply**: rewrite every file's autogenerated block from an option dictionary
/// - **check**: report which files differ from what apply would write
/// - **preview**: show those differences as unified diffs
/// - **read_current**: parse the options back out of a file's block
pub struct NutEngine {
    layout: NutLayout,
    router: Router<'static>,
}

impl NutEngine {
    /// Create an engine over the built-in NUT tables.
    pub fn new(layout: NutLayout) -> Self {
        Self {
            layout,
            router: Router::nut(),
        }
    }

    pub fn layout(&self) -> &NutLayout {
        &self.layout
    }

    pub fn router(&self) -> &Router<'static> {
        &self.router
    }

    /// Route `options` without touching the filesystem.
    pub fn route(&self, options: &RawOptions) -> RoutedConfig {
        self.router.route(options)
    }

    /// Rewrite each NUT file for `options`, in table order.
    ///
    /// Stops at the first failing file; files written before it keep their
    /// new content.
    pub fn apply(&self, options: &RawOptions) -> Result<ApplyReport> {
        let routed = self.route(options);
        let mut report = ApplyReport {
            files: Vec::new(),
            unrouted: routed.unrouted().to_vec(),
        };

        for (file, file_options) in routed.iter() {
            let path = self.layout.path_of(file);
            tracing::debug!(%file, path = %path.display(), options = file_options.len(), "applying");
            let outcome = writer::write_file(&path, file_options)?;
            report.files.push(FileReport {
                file,
                path,
                outcome,
            });
        }

        Ok(report)
    }

    /// Compare the files on disk against what [`apply`](Self::apply) would
    /// write, without writing.
    pub fn check(&self, options: &RawOptions) -> Result<CheckReport> {
        let routed = self.route(options);
        let mut items = Vec::new();

        for (file, file_options) in routed.iter() {
            let path = self.layout.path_of(file);
            let current = io::read_text_if_exists(&path)?;

            let state = match (&current, writer::render_file(current.as_deref(), file_options)) {
                (None, Some(_)) => FileState::Missing,
                (_, None) => FileState::InSync,
                (Some(current), Some(rendered)) if *current == rendered => FileState::InSync,
                (Some(_), Some(_)) => FileState::Drifted,
            };

            items.push(FileCheck { file, path, state });
        }

        Ok(CheckReport::from_items(items, routed.unrouted().to_vec()))
    }

    /// Describe, per file, what [`apply`](Self::apply) would change.
    pub fn preview(&self, options: &RawOptions) -> Result<Vec<FilePreview>> {
        let routed = self.route(options);
        let mut previews = Vec::new();

        for (file, file_options) in routed.iter() {
            let path = self.layout.path_of(file);
            let current = io::read_text_if_exists(&path)?;
            let proposed = writer::render_file(current.as_deref(), file_options);
            previews.push(FilePreview::new(file, path, current, proposed));
        }

        Ok(previews)
    }

    /// Parse the options currently in `file`'s autogenerated block.
    ///
    /// Returns `None` when the file has no block. The section line is keyed
    /// by the file's section-header option name.
    pub fn read_current(&self, file: NutFile) -> Result<Option<FileOptions>> {
        let path = self.layout.path_of(file);
        let Some(content) = io::read_text_if_exists(&path)? else {
            return Ok(None);
        };

        Ok(parse_block(&content).map(|block| {
            FileOptions::parse_lines(&block.lines, self.router.headers().header_for(file))
        }))
    }
}

/// Route `options` and rewrite the NUT files of the running system.
pub fn configure_nut(options: &RawOptions) -> Result<()> {
    let report = NutEngine::new(NutLayout::system()).apply(options)?;
    tracing::debug!(updated = report.updated().count(), "NUT configuration applied");
    Ok(())
}
