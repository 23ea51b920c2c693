//! # DataCat CLI (`datacat`)
//!
//! The `datacat` binary is the primary interface for DataCat. It serves
//! the same catalog and search semantics as the HTTP API, rendered for
//! a terminal.
//!
//! ## Usage
//!
//! ```bash
//! datacat --config ./config/datacat.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `datacat list` | Print every product in the catalog |
//! | `datacat search "<query>"` | Filter products by keyword and intent rules |
//! | `datacat suggest "<query>"` | Show up to 3 suggestions for a query |
//! | `datacat get <id>` | Print a product's full detail view |
//! | `datacat export` | Dump the catalog as JSON |
//! | `datacat serve` | Start the catalog HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # Keyword search with an intent rule
//! datacat search "sensitive customer data"
//!
//! # Suggestions as JSON, for scripting
//! datacat suggest "pricing" --json
//!
//! # Serve the API for a browser client
//! datacat serve --config ./config/datacat.toml
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use datacat::{config, export, get, list, load, search, server, suggest};

/// DataCat CLI — a data product catalog with keyword search and
/// intent-based suggestions.
///
/// All commands accept a `--config` flag pointing to a TOML
/// configuration file. When the file does not exist, the built-in
/// sample catalog and default server settings are used.
#[derive(Parser)]
#[command(
    name = "datacat",
    about = "DataCat — a data product catalog with keyword search and intent-based suggestions",
    version,
    long_about = "DataCat holds an in-memory catalog of data product records and answers \
    free-text queries with a filtered product list plus keyword-triggered suggestions, \
    via this CLI or a JSON HTTP server."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/datacat.toml`. Catalog source and server
    /// settings are read from this file.
    #[arg(long, global = true, default_value = "./config/datacat.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List every product in the catalog.
    List {
        /// Emit the full product records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog.
    ///
    /// A product matches on substring containment in its name,
    /// description, domain, or columns, or through a fixed set of
    /// keyword intent rules. An empty query returns everything.
    Search {
        /// The search query string.
        query: String,

        /// Emit matches as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show suggestions for a query.
    ///
    /// Evaluates the keyword-triggered suggestion rules and prints at
    /// most three entries.
    Suggest {
        /// The query string to derive suggestions from.
        query: String,

        /// Emit suggestions as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print a product's full detail view.
    ///
    /// Shows metadata, schema, and whichever usage, cost, lineage,
    /// quality, log, and failed-job payloads the product carries.
    Get {
        /// Product id.
        id: u32,

        /// Emit the product record as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Export the catalog as JSON.
    ///
    /// The output is the serialized product list, which `[catalog] path`
    /// in config accepts back as a catalog source.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Start the catalog HTTP server.
    ///
    /// Binds to the address configured in `[server].bind` and serves
    /// the catalog JSON API with permissive CORS.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;
    let catalog = load::load_catalog(&cfg)?;

    match cli.command {
        Commands::List { json } => list::run_list(&catalog, json)?,
        Commands::Search { query, json } => search::run_search(&catalog, &query, json)?,
        Commands::Suggest { query, json } => suggest::run_suggest(&catalog, &query, json)?,
        Commands::Get { id, json } => get::run_get(&catalog, id, json)?,
        Commands::Export { output } => export::run_export(&catalog, output.as_deref())?,
        Commands::Serve => server::run_server(&cfg, catalog).await?,
    }

    Ok(())
}
