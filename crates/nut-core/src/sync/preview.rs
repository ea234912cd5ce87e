//! Pending-change previews

use std::path::PathBuf;

use similar::TextDiff;

use crate::table::NutFile;

/// What an apply would do to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub file: NutFile,
    pub path: PathBuf,
    /// Current text, `None` if the file does not exist
    pub current: Option<String>,
    /// Text after the apply, `None` if the file would be left alone
    pub proposed: Option<String>,
}

impl FilePreview {
    pub(crate) fn new(
        file: NutFile,
        path: PathBuf,
        current: Option<String>,
        proposed: Option<String>,
    ) -> Self {
        Self {
            file,
            path,
            current,
            proposed,
        }
    }

    /// Whether applying would change the file.
    pub fn has_changes(&self) -> bool {
        match &self.proposed {
            Some(proposed) => self.current.as_deref() != Some(proposed.as_str()),
            None => false,
        }
    }

    /// Whether the apply would fail because the file is absent.
    pub fn is_missing(&self) -> bool {
        self.current.is_none() && self.proposed.is_some()
    }

    /// Unified diff from the current to the proposed text; empty without
    /// changes.
    pub fn unified_diff(&self) -> String {
        if !self.has_changes() {
            return String::new();
        }

        let old = self.current.as_deref().unwrap_or_default();
        let new = self.proposed.as_deref().unwrap_or_default();
        let path = self.path.display().to_string();

        TextDiff::from_lines(old, new)
            .unified_diff()
            .context_radius(3)
            .header(&format!("a{}", path), &format!("b{}", path))
            .to_string()
    }
}
