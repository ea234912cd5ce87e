//! Check types for NutEngine validation
//!
//! Reports how far the files on disk are from what an apply would write.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::table::NutFile;

/// Overall status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Every file already holds its rendered block
    Healthy,
    /// Some files that should receive options do not exist
    Missing,
    /// Some files hold a different block, or none
    Drifted,
}

/// State of a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileState {
    InSync,
    Drifted,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCheck {
    pub file: NutFile,
    pub path: PathBuf,
    pub state: FileState,
}

/// Report from a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Overall status; drift outranks missing files
    pub status: CheckStatus,
    /// One entry per file, in write order
    pub files: Vec<FileCheck>,
    /// Input option names no file recognizes
    pub unrouted: Vec<String>,
}

impl CheckReport {
    pub(crate) fn from_items(files: Vec<FileCheck>, unrouted: Vec<String>) -> Self {
        let has = |state| files.iter().any(|f| f.state == state);
        let status = if has(FileState::Drifted) {
            CheckStatus::Drifted
        } else if has(FileState::Missing) {
            CheckStatus::Missing
        } else {
            CheckStatus::Healthy
        };

        Self {
            status,
            files,
            unrouted,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == CheckStatus::Healthy
    }

    /// Files in the given state.
    pub fn in_state(&self, state: FileState) -> impl Iterator<Item = &FileCheck> {
        self.files.iter().filter(move |f| f.state == state)
    }
}
