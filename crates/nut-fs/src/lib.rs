//! Filesystem layer for nutconf
//!
//! Provides atomic, locked file replacement and loading of flat option
//! dictionaries from TOML, JSON or YAML files.

pub mod error;
pub mod io;
pub mod options;

pub use error::{Error, Result};
pub use options::{OptionsStore, RawOptions};
