//! CLI entry point for catalog search.
//!
//! The match semantics live in `datacat_core::search`; this wrapper
//! only renders the filtered products as text or JSON.

use anyhow::Result;

use datacat_core::{filter, Catalog};

/// Run `datacat search <query>` and print matches to stdout.
pub fn run_search(catalog: &Catalog, query: &str, json: bool) -> Result<()> {
    let results = filter(catalog, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, product) in results.iter().enumerate() {
        println!("{}. {} (id {})", i + 1, product.name, product.id);
        println!("    domain: {}", product.domain);
        println!("    owner: {}", product.owner);
        println!(
            "    sensitivity: {}  quality: {}  updated: {}",
            product.sensitivity, product.quality, product.update_frequency
        );
        println!("    {}", product.description);
    }

    Ok(())
}
