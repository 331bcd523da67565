//! Catalog command - list the recognized parameters.

use anyhow::Result;
use rdp_handler::catalog::{self, CATALOG_VERSION};

pub fn run(json: bool) -> Result<()> {
    let entries = catalog::entries();

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    println!(
        "Recognized parameters (catalog v{CATALOG_VERSION}, {} entries):",
        entries.len()
    );
    for entry in entries {
        println!("  {:width$}  {}", entry.name, entry.value_hint());
    }
    Ok(())
}
