//! Format-agnostic loading of flat option dictionaries

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, io};

/// A flat, insertion-ordered option dictionary as submitted by a form.
pub type RawOptions = IndexMap<String, String>;

/// A scalar accepted as an option value in an options file.
///
/// Numbers and booleans are accepted so `MAXAGE = 15` works in TOML; they are
/// converted to their textual form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Loads option dictionaries from files.
///
/// Detects format from file extension and keeps the key order of the
/// document.
#[derive(Debug, Default)]
pub struct OptionsStore;

impl OptionsStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a flat option dictionary from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(&self, path: &Path) -> Result<RawOptions> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => {
                return Err(Error::UnsupportedFormat { extension });
            }
        };

        let content = io::read_text(path)?;
        let parsed: std::result::Result<IndexMap<String, ScalarValue>, String> = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        let parsed = parsed.map_err(|message| Error::OptionsParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        })?;

        tracing::debug!(path = %path.display(), count = parsed.len(), "loaded options file");

        Ok(parsed
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect())
    }
}
