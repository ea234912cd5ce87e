//! Command implementations for nut-cli

pub mod apply;
pub mod check;
pub mod options;
pub mod show;

pub use apply::{run_apply, run_diff};
pub use check::run_check;
pub use show::{run_routes, run_show};
