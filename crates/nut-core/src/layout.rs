//! Resolution of NUT file paths against a filesystem root

use std::path::{Path, PathBuf};

use crate::NutFile;

/// Where the fixed `/etc/ups/...` paths live.
///
/// On a running host the root is `/`. Image builders and tests point it at a
/// staging directory; the paths below the root never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutLayout {
    root: PathBuf,
}

impl Default for NutLayout {
    fn default() -> Self {
        Self::system()
    }
}

impl NutLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The layout of the running system, rooted at `/`.
    pub fn system() -> Self {
        Self::new("/")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The on-disk path of `file` under this root.
    pub fn path_of(&self, file: NutFile) -> PathBuf {
        self.root.join(file.path().trim_start_matches('/'))
    }
}
