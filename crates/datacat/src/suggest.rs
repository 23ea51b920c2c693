//! CLI entry point for query suggestions.

use anyhow::Result;

use datacat_core::{suggest, Catalog};

/// Run `datacat suggest <query>` and print up to three suggestions.
pub fn run_suggest(catalog: &Catalog, query: &str, json: bool) -> Result<()> {
    let suggestions = suggest(catalog, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, suggestion.title);
        println!("    {}", suggestion.description);
        println!("    columns: {}", suggestion.columns.join(", "));
        println!("    why: {}", suggestion.reasoning);
    }

    Ok(())
}
