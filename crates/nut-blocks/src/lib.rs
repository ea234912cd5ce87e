//! Autogenerated block handling for NUT configuration files.
//!
//! Every file nutconf manages may carry one trailing region it owns:
//!
//! ```text
//! manual content, preserved verbatim
//! ####BEGIN: Rockstor NUT Config####
//! ####Autogenerated. Do not edit below this line####
//! [myups]
//! driver = apcsmart
//! ```
//!
//! Everything from the begin marker to the end of the file belongs to the
//! block and is replaced wholesale on every update. The [`parser`] module
//! locates and reads the block, the [`writer`] module splices a new one in.

pub mod parser;
pub mod writer;

pub use parser::{Block, has_block, parse_block};
pub use writer::{format_block, upsert_block};

/// First delimiter line of the autogenerated block.
pub const BEGIN_MARKER: &str = "####BEGIN: Rockstor NUT Config####";

/// Second delimiter line; rendered option lines follow it.
pub const AUTOGEN_MARKER: &str = "####Autogenerated. Do not edit below this line####";
