//! Locating and reading the autogenerated block.

use regex::Regex;
use std::sync::LazyLock;

use crate::{AUTOGEN_MARKER, BEGIN_MARKER};

/// The autogenerated block of a file, split from the manual content above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Everything before the begin marker line, byte for byte.
    pub prefix: String,
    /// The lines after the autogenerated marker, without line endings.
    pub lines: Vec<String>,
    /// The 1-based line number of the begin marker.
    pub start_line: usize,
    /// Whether the autogenerated marker follows the begin marker.
    pub terminated: bool,
}

/// Matches the begin marker as a whole line, tolerating trailing blanks and CRLF.
static BEGIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^{}[ \t]*\r?$", regex::escape(BEGIN_MARKER)))
        .expect("Invalid begin marker regex")
});

/// Parses the autogenerated block out of `content`.
///
/// Only the first begin marker counts; a second one further down is part of
/// the owned region and gets discarded on the next write. Returns `None` when
/// the file has no begin marker.
///
/// # Example
/// ```
/// use nut_blocks::parser::parse_block;
///
/// let content = "# manual\n\
/// #####BEGIN: Rockstor NUT Config####\n\
/// #####Autogenerated. Do not edit below this line####\n\
/// MODE = netserver\n";
///
/// let block = parse_block(content).unwrap();
/// assert_eq!(block.prefix, "# manual\n");
/// assert_eq!(block.lines, vec!["MODE = netserver"]);
/// ```
pub fn parse_block(content: &str) -> Option<Block> {
    let begin = BEGIN_REGEX.find(content)?;

    let prefix = content[..begin.start()].to_string();
    let start_line = prefix.matches('\n').count() + 1;

    let mut rest = content[begin.end()..].lines();
    // `lines()` yields the empty tail of the begin line first
    rest.next();

    let owned: Vec<&str> = rest.collect();
    let (lines, terminated) = match owned
        .iter()
        .position(|line| line.trim_end() == AUTOGEN_MARKER)
    {
        Some(idx) => (owned[idx + 1..].to_vec(), true),
        None => {
            tracing::warn!(
                line = start_line,
                "begin marker without autogenerated marker; treating the rest of the file as owned"
            );
            (owned, false)
        }
    };

    Some(Block {
        prefix,
        lines: lines.into_iter().map(str::to_string).collect(),
        start_line,
        terminated,
    })
}

/// Checks if `content` contains a begin marker line.
pub fn has_block(content: &str) -> bool {
    BEGIN_REGEX.is_match(content)
}
