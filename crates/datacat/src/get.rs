//! Product detail view by id.
//!
//! Renders everything the catalog knows about one product: metadata,
//! schema, and whichever usage/cost/lineage/quality payloads it carries.
//! Used by the `datacat get` CLI command; the HTTP server returns the
//! same product as JSON from `GET /products/{id}`.

use anyhow::Result;

use datacat_core::Catalog;

/// CLI entry point for `datacat get <id>`.
pub fn run_get(catalog: &Catalog, id: u32, json: bool) -> Result<()> {
    let product = match catalog.by_id(id) {
        Some(p) => p,
        None => {
            eprintln!("Error: product not found: {}", id);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(product)?);
        return Ok(());
    }

    println!("--- Product ---");
    println!("id:          {}", product.id);
    println!("name:        {}", product.name);
    println!("domain:      {}", product.domain);
    println!("owner:       {}", product.owner);
    println!("updated:     {}", product.update_frequency);
    println!("sensitivity: {}", product.sensitivity);
    println!("quality:     {}/100", product.quality);
    println!("{}", product.description);
    println!();

    println!("--- Schema ({} columns) ---", product.columns.len());
    for column in &product.columns {
        println!(
            "{:<20} {:<8} {:<8} {}",
            column.name,
            column.data_type,
            column.sensitivity.to_string(),
            column.description
        );
    }

    if let Some(ref usage) = product.usage {
        println!();
        println!("--- Usage ---");
        println!("views/month:   {}", usage.views_per_month);
        println!("queries/month: {}", usage.queries_per_month);
        println!("top consumers: {}", usage.top_consumers.join(", "));
        println!(
            "last accessed: {}",
            usage.last_accessed.format("%Y-%m-%d %H:%M UTC")
        );
    }

    if let Some(ref metrics) = product.metrics {
        println!();
        println!("--- Metrics ---");
        println!("rows:      {}", metrics.row_count);
        println!("size:      {} GB", metrics.size_gb);
        println!("freshness: {}%", metrics.freshness_pct);
    }

    if let Some(ref cost) = product.cost {
        println!();
        println!("--- Monthly Cost ---");
        println!("storage: ${:.2}", cost.storage_usd);
        println!("compute: ${:.2}", cost.compute_usd);
        println!("total:   ${:.2}", cost.total_usd);
    }

    if let Some(ref lineage) = product.lineage {
        println!();
        println!("--- Lineage ---");
        println!("upstream:        {}", lineage.upstream.join(", "));
        println!("transformations: {}", lineage.transformations.join(", "));
        println!("downstream:      {}", lineage.downstream.join(", "));
    }

    if !product.data_quality.is_empty() {
        println!();
        println!("--- Data Quality ---");
        for metric in &product.data_quality {
            println!(
                "{:<16} {:>3}/100  ({})",
                metric.metric, metric.score, metric.trend
            );
        }
    }

    if !product.logs.is_empty() {
        println!();
        println!("--- Recent Logs ---");
        for entry in &product.logs {
            println!(
                "{}  {:<5} {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.level,
                entry.message
            );
        }
    }

    if !product.failed_jobs.is_empty() {
        println!();
        println!("--- Failed Jobs ---");
        for job in &product.failed_jobs {
            println!(
                "{}  {}: {}",
                job.failed_at.format("%Y-%m-%d %H:%M:%S"),
                job.job,
                job.error
            );
        }
    }

    Ok(())
}
