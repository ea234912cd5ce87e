//! Ordered per-file option maps and their line rendering

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How an option renders in its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// `[value]`
    Section,
    /// `name = value`
    Assignment,
}

/// A single option destined for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub value: String,
    pub kind: EntryKind,
}

impl OptionEntry {
    pub fn render(&self, name: &str) -> String {
        match self.kind {
            EntryKind::Section => format!("[{}]", self.value),
            EntryKind::Assignment => format!("{} = {}", name, self.value),
        }
    }
}

/// The options of one file, in the order they will be written.
///
/// Section headers always sit in front of the assignments they govern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileOptions {
    entries: IndexMap<String, OptionEntry>,
}

impl FileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` as a section header ahead of every other entry.
    pub fn insert_section(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.shift_insert(
            0,
            name.into(),
            OptionEntry {
                value: value.into(),
                kind: EntryKind::Section,
            },
        );
    }

    /// Append `name = value`, unless `name` is already present.
    ///
    /// An existing entry keeps its position, kind and value, so a name
    /// already placed as the section header is not duplicated.
    pub fn insert_assignment(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into())
            .or_insert_with(|| OptionEntry {
                value: value.into(),
                kind: EntryKind::Assignment,
            });
    }

    pub fn get(&self, name: &str) -> Option<&OptionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Render every entry as a config line, in order.
    pub fn render_lines(&self) -> Vec<String> {
        self.iter().map(|(name, entry)| entry.render(name)).collect()
    }

    /// Read options back from rendered lines.
    ///
    /// `[value]` lines become a section under `section_name`; `name = value`
    /// lines become assignments. Blank lines, comments and anything else are
    /// ignored.
    pub fn parse_lines<S: AsRef<str>>(lines: &[S], section_name: Option<&str>) -> Self {
        let mut options = Self::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(value) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                options.insert_section(section_name.unwrap_or("section"), value);
            } else if let Some((name, value)) = line.split_once('=') {
                options.insert_assignment(name.trim(), value.trim());
            } else {
                tracing::debug!(line, "ignoring unrecognized line in autogenerated block");
            }
        }
        options
    }
}
