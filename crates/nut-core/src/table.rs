//! Static routing tables
//!
//! Declares the five NUT configuration files, which option names each of
//! them recognizes, and which option names open a `[section]` in which file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the NUT configuration files nutconf manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutFile {
    /// `nut.conf`: the run mode
    Nut,
    /// `ups.conf`: driver definitions
    Ups,
    /// `upsd.conf`: data server
    Upsd,
    /// `upsd.users`: data server users
    UpsdUsers,
    /// `upsmon.conf`: monitor client
    Upsmon,
}

impl NutFile {
    /// All files, in write order.
    pub const ALL: [NutFile; 5] = [
        NutFile::Nut,
        NutFile::Ups,
        NutFile::Upsd,
        NutFile::UpsdUsers,
        NutFile::Upsmon,
    ];

    /// The absolute path of the file on a running system.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Nut => "/etc/ups/nut.conf",
            Self::Ups => "/etc/ups/ups.conf",
            Self::Upsd => "/etc/ups/upsd.conf",
            Self::UpsdUsers => "/etc/ups/upsd.users",
            Self::Upsmon => "/etc/ups/upsmon.conf",
        }
    }

    /// The file name without directories.
    pub fn file_name(&self) -> &'static str {
        self.path().rsplit('/').next().unwrap_or_default()
    }
}

impl fmt::Display for NutFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Which option names belong to which file.
///
/// An option name may appear under several files; it is then written to each
/// of them.
#[derive(Debug, Clone, Copy)]
pub struct RoutingTable<'a> {
    entries: &'a [(NutFile, &'a [&'a str])],
}

impl<'a> RoutingTable<'a> {
    pub const fn new(entries: &'a [(NutFile, &'a [&'a str])]) -> Self {
        Self { entries }
    }

    /// Iterate `(file, recognized names)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (NutFile, &'a [&'a str])> + '_ {
        self.entries.iter().copied()
    }

    /// The names recognized by `file`, empty if the table has no such file.
    pub fn options_for(&self, file: NutFile) -> &'a [&'a str] {
        self.entries
            .iter()
            .find(|(f, _)| *f == file)
            .map(|(_, names)| *names)
            .unwrap_or_default()
    }

    /// Whether any file recognizes `name`.
    pub fn recognizes(&self, name: &str) -> bool {
        self.entries.iter().any(|(_, names)| names.contains(&name))
    }
}

/// Which option names render as `[value]` section headers, and in which file.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeaderTable<'a> {
    entries: &'a [(&'a str, NutFile)],
}

impl<'a> SectionHeaderTable<'a> {
    pub const fn new(entries: &'a [(&'a str, NutFile)]) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, NutFile)> + '_ {
        self.entries.iter().copied()
    }

    /// The section-header option name used by `file`, if any.
    pub fn header_for(&self, file: NutFile) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(_, f)| *f == file)
            .map(|(name, _)| *name)
    }

    /// Whether `name` is a section header in any file.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Check that every header name targets exactly one file.
    pub fn validate(&self) -> Result<()> {
        for (idx, (name, _)) in self.entries.iter().enumerate() {
            if self.entries[idx + 1..].iter().any(|(other, _)| other == name) {
                return Err(Error::DuplicateSectionHeader {
                    name: (*name).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The options each NUT file recognizes.
pub static ROUTING_TABLE: RoutingTable<'static> = RoutingTable::new(&[
    (NutFile::Nut, &["MODE"]),
    (NutFile::Ups, &["upsname", "driver", "port", "cable", "desc"]),
    (NutFile::Upsd, &["LISTEN", "MAXAGE"]),
    (NutFile::UpsdUsers, &["nutuser", "nutuserpass", "upsmon"]),
    (
        NutFile::Upsmon,
        &["upsname", "nutserver", "nutuser", "nutuserpass"],
    ),
]);

/// `upsname` opens the UPS definition in `ups.conf`, `nutuser` the user
/// definition in `upsd.users`.
pub static SECTION_HEADERS: SectionHeaderTable<'static> = SectionHeaderTable::new(&[
    ("upsname", NutFile::Ups),
    ("nutuser", NutFile::UpsdUsers),
]);
