use anyhow::Result;

use datacat_core::Catalog;

/// Print the whole catalog as a table, or as JSON with `--json`.
pub fn run_list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.all())?);
        return Ok(());
    }

    println!(
        "{:<4} {:<28} {:<18} {:<12} {:<8} OWNER",
        "ID", "NAME", "DOMAIN", "SENSITIVITY", "QUALITY"
    );
    for product in catalog.all() {
        println!(
            "{:<4} {:<28} {:<18} {:<12} {:<8} {}",
            product.id,
            product.name,
            product.domain,
            product.sensitivity.to_string(),
            product.quality,
            product.owner
        );
    }

    Ok(())
}
