//! Shared test utilities for the nutconf workspace.
//!
//! This crate provides a [`TestRoot`] fixture: a temporary directory laid out
//! like a host's `/etc/ups`. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`root`]: [`TestRoot`] builder with stock NUT files and file assertions

pub mod root;

pub use root::{STOCK_FILES, TestRoot};
