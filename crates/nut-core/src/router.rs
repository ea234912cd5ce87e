//! Routing of a flat option dictionary to per-file option maps
//!
//! Section headers are placed first, into the one file that declares them.
//! Every option is then copied into each file that recognizes it; nothing is
//! consumed, so an option shared by two files lands in both.

use indexmap::IndexMap;

use crate::options::FileOptions;
use crate::table::{NutFile, ROUTING_TABLE, RoutingTable, SECTION_HEADERS, SectionHeaderTable};
use crate::{RawOptions, Result};

/// The outcome of routing one option dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutedConfig {
    files: IndexMap<NutFile, FileOptions>,
    unrouted: Vec<String>,
}

impl RoutedConfig {
    /// Options for `file`; empty if nothing was routed there.
    pub fn options(&self, file: NutFile) -> Option<&FileOptions> {
        self.files.get(&file)
    }

    /// Iterate `(file, options)` in routing table order.
    pub fn iter(&self) -> impl Iterator<Item = (NutFile, &FileOptions)> {
        self.files.iter().map(|(file, options)| (*file, options))
    }

    /// Input names that no file recognizes, in input order.
    pub fn unrouted(&self) -> &[String] {
        &self.unrouted
    }
}

/// Partitions option dictionaries using a routing and a section-header table.
#[derive(Debug, Clone, Copy)]
pub struct Router<'t> {
    routing: &'t RoutingTable<'t>,
    headers: &'t SectionHeaderTable<'t>,
}

impl Router<'static> {
    /// A router over the built-in NUT tables.
    pub fn nut() -> Self {
        Self {
            routing: &ROUTING_TABLE,
            headers: &SECTION_HEADERS,
        }
    }
}

impl<'t> Router<'t> {
    /// Build a router, rejecting a header table that targets one name at
    /// several files.
    pub fn new(routing: &'t RoutingTable<'t>, headers: &'t SectionHeaderTable<'t>) -> Result<Self> {
        headers.validate()?;
        Ok(Self { routing, headers })
    }

    pub fn routing(&self) -> &RoutingTable<'t> {
        self.routing
    }

    pub fn headers(&self) -> &SectionHeaderTable<'t> {
        self.headers
    }

    /// Route `input` into one ordered option map per file.
    ///
    /// Every file of the routing table gets an entry, possibly empty. Names
    /// no file recognizes are dropped and reported in
    /// [`RoutedConfig::unrouted`].
    pub fn route(&self, input: &RawOptions) -> RoutedConfig {
        let mut files: IndexMap<NutFile, FileOptions> = self
            .routing
            .iter()
            .map(|(file, _)| (file, FileOptions::new()))
            .collect();

        for (name, file) in self.headers.iter() {
            if let Some(value) = input.get(name) {
                tracing::trace!(option = name, %file, "routing section header");
                files.entry(file).or_default().insert_section(name, value.as_str());
            }
        }

        for (file, recognized) in self.routing.iter() {
            let options = files.entry(file).or_default();
            for (name, value) in input {
                if recognized.contains(&name.as_str()) {
                    options.insert_assignment(name.as_str(), value.as_str());
                }
            }
        }

        let unrouted: Vec<String> = input
            .keys()
            .filter(|name| !self.routing.recognizes(name) && !self.headers.contains(name))
            .cloned()
            .collect();

        for name in &unrouted {
            tracing::warn!(option = %name, "option is not recognized by any NUT file; dropping it");
        }

        RoutedConfig { files, unrouted }
    }
}
