//! Core layer for nutconf
//!
//! Turns a flat option dictionary submitted by a management UI into the
//! configuration files of the Network UPS Tools daemons:
//!
//! - **Tables**: which options belong to which file, and which options open
//!   a `[section]`
//! - **Router**: partitions the dictionary into one ordered option map per file
//! - **Writer**: replaces each file's autogenerated block, atomically
//! - **NutEngine**: apply, check and preview over a filesystem root
//!
//! # Architecture
//!
//! ```text
//!          nut-cli
//!             |
//!         nut-core
//!             |
//!      +------+------+
//!      |             |
//!   nut-fs      nut-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use nut_core::{NutEngine, NutLayout, RawOptions};
//!
//! let mut options = RawOptions::new();
//! options.insert("MODE".into(), "netserver".into());
//!
//! let engine = NutEngine::new(NutLayout::system());
//! let report = engine.apply(&options)?;
//! # Ok::<(), nut_core::Error>(())
//! ```

pub mod error;
pub mod layout;
pub mod options;
pub mod router;
pub mod sync;
pub mod table;
pub mod writer;

pub use error::{Error, Result};
pub use layout::NutLayout;
pub use nut_fs::RawOptions;
pub use options::{EntryKind, FileOptions, OptionEntry};
pub use router::{RoutedConfig, Router};
pub use sync::{
    ApplyReport, CheckReport, CheckStatus, FileCheck, FilePreview, FileReport, FileState,
    NutEngine, configure_nut,
};
pub use table::{NutFile, ROUTING_TABLE, RoutingTable, SECTION_HEADERS, SectionHeaderTable};
pub use writer::FileOutcome;
