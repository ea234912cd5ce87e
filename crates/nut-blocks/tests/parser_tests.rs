//! Integration tests for block parsing functionality.

use nut_blocks::parser::{has_block, parse_block};
use nut_blocks::{AUTOGEN_MARKER, BEGIN_MARKER};
use pretty_assertions::assert_eq;

fn managed(prefix: &str, lines: &[&str]) -> String {
    let mut content = format!("{}{}\n{}\n", prefix, BEGIN_MARKER, AUTOGEN_MARKER);
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}

#[test]
fn test_no_block_returns_none() {
    let content = "# Network UPS Tools: example ups.conf\n[myups]\ndriver = dummy\n";
    assert!(parse_block(content).is_none());
    assert!(!has_block(content));
}

#[test]
fn test_empty_content_returns_none() {
    assert!(parse_block("").is_none());
}

#[test]
fn test_block_parsed_correctly() {
    let content = managed(
        "# manual\nMONITOR other@host 1 u p slave\n",
        &["[myups]", "driver = apcsmart", "port = /dev/ttyS1"],
    );

    let block = parse_block(&content).unwrap();
    assert_eq!(block.prefix, "# manual\nMONITOR other@host 1 u p slave\n");
    assert_eq!(
        block.lines,
        vec!["[myups]", "driver = apcsmart", "port = /dev/ttyS1"]
    );
    assert!(block.terminated);
}

#[test]
fn test_line_positions_correct() {
    let content = managed("Line 1\nLine 2\n", &["MODE = netserver"]);

    let block = parse_block(&content).unwrap();
    assert_eq!(block.start_line, 3);
}

#[test]
fn test_empty_block() {
    let content = managed("", &[]);
    let block = parse_block(&content).unwrap();
    assert!(block.lines.is_empty());
    assert!(block.terminated);
}

#[test]
fn test_crlf_markers_are_recognised() {
    let content = format!(
        "# dos file\r\n{}\r\n{}\r\nMODE = standalone\r\n",
        BEGIN_MARKER, AUTOGEN_MARKER
    );

    let block = parse_block(&content).unwrap();
    assert_eq!(block.prefix, "# dos file\r\n");
    assert_eq!(block.lines, vec!["MODE = standalone"]);
    assert!(block.terminated);
}

#[test]
fn test_first_begin_marker_wins() {
    let content = format!(
        "top\n{}\n{}\na = 1\n{}\nb = 2\n",
        BEGIN_MARKER, AUTOGEN_MARKER, BEGIN_MARKER
    );

    let block = parse_block(&content).unwrap();
    assert_eq!(block.prefix, "top\n");
    assert_eq!(block.lines, vec!["a = 1", BEGIN_MARKER, "b = 2"]);
}

#[test]
fn test_lines_between_markers_are_skipped() {
    let content = format!(
        "{}\nhand edit\n{}\nMAXAGE = 15\n",
        BEGIN_MARKER, AUTOGEN_MARKER
    );

    let block = parse_block(&content).unwrap();
    assert_eq!(block.lines, vec!["MAXAGE = 15"]);
}

#[test]
fn test_indented_marker_is_not_a_block() {
    let content = format!("  {}\n", BEGIN_MARKER);
    assert!(!has_block(&content));
}
