//! Applying routed options to the NUT files on disk
//!
//! This module provides:
//! - **apply**: route options and rewrite each file's autogenerated block
//! - **check**: compare what apply would write against the files on disk
//! - **preview**: unified diffs of the pending changes

mod check;
mod engine;
mod preview;

pub use check::{CheckReport, CheckStatus, FileCheck, FileState};
pub use engine::{ApplyReport, FileReport, NutEngine, configure_nut};
pub use preview::FilePreview;
