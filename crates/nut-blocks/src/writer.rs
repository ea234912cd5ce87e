//! Splicing a freshly rendered autogenerated block into file content.

use crate::parser::parse_block;
use crate::{AUTOGEN_MARKER, BEGIN_MARKER};

/// Creates a complete block: both markers followed by `lines`, each
/// terminated by a newline.
pub fn format_block<S: AsRef<str>>(lines: &[S]) -> String {
    let mut block = format!("{}\n{}\n", BEGIN_MARKER, AUTOGEN_MARKER);
    for line in lines {
        block.push_str(line.as_ref());
        block.push('\n');
    }
    block
}

/// Joins the preserved prefix and a block, adding the newline the prefix
/// may lack so the begin marker always starts its own line.
fn join(prefix: &str, block: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('\n') {
        format!("{}{}", prefix, block)
    } else {
        format!("{}\n{}", prefix, block)
    }
}

/// Replaces the autogenerated block of `content` with `lines`, or appends a
/// new block if the content has none.
///
/// Content above the begin marker is kept byte for byte. Applying the same
/// lines twice yields the same text.
///
/// # Example
/// ```
/// use nut_blocks::writer::upsert_block;
///
/// let once = upsert_block("# keep me\n", &["MODE = netserver"]);
/// assert!(once.starts_with("# keep me\n####BEGIN: Rockstor NUT Config####\n"));
///
/// let twice = upsert_block(&once, &["MODE = netserver"]);
/// assert_eq!(once, twice);
/// ```
pub fn upsert_block<S: AsRef<str>>(content: &str, lines: &[S]) -> String {
    let block = format_block(lines);
    match parse_block(content) {
        Some(existing) => join(&existing.prefix, &block),
        None => join(content, &block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_block_empty() {
        let lines: [&str; 0] = [];
        assert_eq!(
            format_block(&lines),
            format!("{}\n{}\n", BEGIN_MARKER, AUTOGEN_MARKER)
        );
    }

    #[test]
    fn test_insert_to_empty() {
        let result = upsert_block("", &["MODE = standalone"]);
        assert_eq!(
            result,
            format!("{}\n{}\nMODE = standalone\n", BEGIN_MARKER, AUTOGEN_MARKER)
        );
    }

    #[test]
    fn test_insert_adds_missing_newline() {
        let result = upsert_block("MODE=none", &["MODE = standalone"]);
        assert!(result.starts_with(&format!("MODE=none\n{}\n", BEGIN_MARKER)));
    }

    #[test]
    fn test_update_existing() {
        let content = format!("# top\n{}\n{}\nold = 1\n", BEGIN_MARKER, AUTOGEN_MARKER);
        let result = upsert_block(&content, &["new = 2"]);
        assert_eq!(
            result,
            format!("# top\n{}\n{}\nnew = 2\n", BEGIN_MARKER, AUTOGEN_MARKER)
        );
    }
}
