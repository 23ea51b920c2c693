//! Export the catalog as JSON.
//!
//! Produces the serialized product list, suitable for feeding a static
//! site or for round-tripping through `[catalog] path` in config.

use anyhow::{Context, Result};
use std::path::Path;

use datacat_core::Catalog;

/// Export all products as pretty-printed JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes to
/// stdout for piping.
pub fn run_export(catalog: &Catalog, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.all())?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write export file: {}", path.display()))?;
            println!("Exported {} products to {}", catalog.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
