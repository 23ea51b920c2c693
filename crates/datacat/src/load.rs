//! Catalog construction at startup.
//!
//! The engines treat the catalog as a read-only input; this module is
//! the data-loading collaborator that supplies the product sequence,
//! either the built-in sample dataset or a JSON file named in config
//! (the serialized form of `Vec<Product>`).

use anyhow::{Context, Result};

use datacat_core::{dataset, Catalog, Product};

use crate::config::Config;

/// Build the catalog the configured way. Called once per process.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            let products: Vec<Product> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
            let catalog = Catalog::new(products)?;
            log::info!(
                "loaded {} products from {}",
                catalog.len(),
                path.display()
            );
            Ok(catalog)
        }
        None => {
            let catalog = dataset::sample_catalog();
            log::debug!("using built-in sample dataset ({} products)", catalog.len());
            Ok(catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use std::io::Write;

    #[test]
    fn builtin_dataset_by_default() {
        let catalog = load_catalog(&Config::default()).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn loads_products_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": 1,
                "name": "Only Product",
                "description": "One entry",
                "owner": "Team",
                "domain": "Testing",
                "updateFrequency": "Never",
                "sensitivity": "Low",
                "quality": 60,
                "columns": [
                    {{"name": "k", "type": "string", "sensitivity": "low", "description": "key"}}
                ]
            }}]"#
        )
        .unwrap();

        let config = Config {
            catalog: CatalogConfig {
                path: Some(file.path().to_path_buf()),
            },
            ..Default::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.by_id(1).unwrap().name, "Only Product");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let config = Config {
            catalog: CatalogConfig {
                path: Some(file.path().to_path_buf()),
            },
            ..Default::default()
        };
        assert!(load_catalog(&config).is_err());
    }
}
