//! [`TestRoot`] builder for nutconf test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The five NUT files, relative to the root, with the comment headers a
/// distribution package ships them with.
pub const STOCK_FILES: [(&str, &str); 5] = [
    (
        "etc/ups/nut.conf",
        "# Network UPS Tools: example nut.conf\n#\n# MODE=none\n",
    ),
    (
        "etc/ups/ups.conf",
        "# Network UPS Tools: example ups.conf\n#\n# [myupsname]\n#\tdriver = mydriver\n#\tport = /dev/ttyS1\n",
    ),
    (
        "etc/ups/upsd.conf",
        "# Network UPS Tools: example upsd configuration file\n#\n# LISTEN 127.0.0.1 3493\n",
    ),
    (
        "etc/ups/upsd.users",
        "# Network UPS Tools: Example upsd.users\n#\n# [admin]\n#\tpassword = mypass\n",
    ),
    (
        "etc/ups/upsmon.conf",
        "# Network UPS Tools: example upsmon configuration\n#\n# MONITOR myups@localhost 1 upsmon pass master\n",
    ),
];

/// A temporary filesystem root with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use nut_test_utils::TestRoot;
///
/// let root = TestRoot::with_stock_files();
/// root.assert_file_contains("etc/ups/nut.conf", "MODE=none");
/// ```
pub struct TestRoot {
    temp_dir: TempDir,
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoot {
    /// Create an empty temporary root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a root holding the five stock NUT files.
    pub fn with_stock_files() -> Self {
        let root = Self::new();
        for (path, content) in STOCK_FILES {
            root.write(path, content);
        }
        root
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` (relative to the root).
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path` (relative to the root), creating directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Read `path` (relative to the root).
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read every stock file, in [`STOCK_FILES`] order. Missing files read as
    /// `None`.
    pub fn snapshot(&self) -> Vec<Option<String>> {
        STOCK_FILES
            .iter()
            .map(|(path, _)| fs::read_to_string(self.path(path)).ok())
            .collect()
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }

    /// Assert that the file at `path` (relative to root) does not contain
    /// `content`.
    pub fn assert_file_not_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
