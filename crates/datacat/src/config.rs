use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration, loaded from a TOML file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the product data comes from.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Path to a JSON file holding the product list. When absent, the
    /// built-in sample dataset is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7830".to_string()
}

/// Load configuration from `path`.
///
/// A missing file yields the defaults (built-in dataset, localhost
/// bind), so the demo works out of the box. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_absent() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.server.bind, "127.0.0.1:7830");
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            path = "./data/products.json"

            [server]
            bind = "0.0.0.0:9000"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.catalog.path.unwrap(),
            PathBuf::from("./data/products.json")
        );
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/datacat.toml")).unwrap();
        assert!(config.catalog.path.is_none());
    }
}
