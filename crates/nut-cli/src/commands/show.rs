//! Show and routes command implementations

use std::path::Path;

use colored::Colorize;

use nut_core::{EntryKind, NutEngine, NutFile, NutLayout, ROUTING_TABLE, SECTION_HEADERS};

use crate::error::Result;

/// Print the options held in each file's autogenerated block
pub fn run_show(root: &Path, json: bool) -> Result<()> {
    let engine = NutEngine::new(NutLayout::new(root));

    if json {
        let mut map = serde_json::Map::new();
        for file in NutFile::ALL {
            let current = engine.read_current(file)?;
            map.insert(file.file_name().to_string(), serde_json::to_value(current)?);
        }
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for file in NutFile::ALL {
        let path = engine.layout().path_of(file);
        println!("{}", path.display().to_string().cyan().bold());

        match engine.read_current(file)? {
            None => println!("   {}", "(no autogenerated block)".dimmed()),
            Some(options) if options.is_empty() => println!("   {}", "(empty)".dimmed()),
            Some(options) => {
                for (name, entry) in options.iter() {
                    let marker = match entry.kind {
                        EntryKind::Section => "section".magenta(),
                        EntryKind::Assignment => "".normal(),
                    };
                    println!("   {:<12} = {} {}", name, entry.value, marker);
                }
            }
        }
    }

    Ok(())
}

/// Print the routing and section-header tables
pub fn run_routes() -> Result<()> {
    println!("{}", "Routing".bold());
    for (file, names) in ROUTING_TABLE.iter() {
        println!("   {:<20} {}", file.path().cyan(), names.join(", "));
    }

    println!();
    println!("{}", "Section headers".bold());
    for (name, file) in SECTION_HEADERS.iter() {
        println!("   {:<20} [{}] in {}", name, name, file.path().cyan());
    }

    Ok(())
}
