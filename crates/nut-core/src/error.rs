//! Error types for nut-core

/// Result type for nut-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nut-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A section-header option is declared for more than one file
    #[error("Section header '{name}' is declared for more than one file")]
    DuplicateSectionHeader { name: String },

    /// Filesystem error from nut-fs
    #[error(transparent)]
    Fs(#[from] nut_fs::Error),
}

impl Error {
    /// The kind of the underlying I/O error, if this is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Fs(e) => e.io_kind(),
            _ => None,
        }
    }
}
