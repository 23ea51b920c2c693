//! Core data models for the DataCat catalog.
//!
//! A [`Product`] is one catalog entry: top-level metadata, an ordered
//! schema of [`Column`]s, and optional usage/cost/lineage/quality payloads
//! shown in detail views. The search and suggestion engines inspect only
//! the top-level scalar fields and `columns`; the payloads pass through
//! untouched to whatever renders them.
//!
//! All types serialize with camelCase field names, matching the JSON
//! shape consumed by browser clients of the catalog API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensitivity classification shared by products and columns.
///
/// The demo data this catalog grew out of tagged products as `High` but
/// columns as `high`; both spellings deserialize to the same variant, so
/// every sensitivity comparison is case-insensitive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sensitivity {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensitivity::Low => write!(f, "Low"),
            Sensitivity::Medium => write!(f, "Medium"),
            Sensitivity::High => write!(f, "High"),
        }
    }
}

/// A cataloged data product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique integer identifier, stable for the process lifetime.
    pub id: u32,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub domain: String,
    pub update_frequency: String,
    pub sensitivity: Sensitivity,
    /// Overall quality score, 0 to 100.
    pub quality: u8,
    /// Ordered schema. Non-empty for every shipped product.
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineage: Option<Lineage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<LogEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_jobs: Vec<FailedJob>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_quality: Vec<QualityMetric>,
}

/// A named field of a product's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Unique within a product, not globally.
    pub name: String,
    /// Free-text type tag, display only. The sample data is not
    /// consistent about it and nothing matches on it.
    #[serde(rename = "type")]
    pub data_type: String,
    pub sensitivity: Sensitivity,
    pub description: String,
}

/// Consumption statistics for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub views_per_month: u32,
    pub queries_per_month: u32,
    pub top_consumers: Vec<String>,
    pub last_accessed: DateTime<Utc>,
}

/// Volume and freshness figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub row_count: u64,
    pub size_gb: f64,
    pub freshness_pct: f64,
}

/// Monthly cost breakdown in USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    pub storage_usd: f64,
    pub compute_usd: f64,
    pub total_usd: f64,
}

/// Upstream/downstream dependency graph, by node name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineage {
    pub upstream: Vec<String>,
    pub transformations: Vec<String>,
    pub downstream: Vec<String>,
}

/// A timestamped pipeline log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
}

/// A failed pipeline job attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedJob {
    pub job: String,
    pub failed_at: DateTime<Utc>,
    pub error: String,
}

/// A named quality measurement with its recent direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetric {
    pub metric: String,
    pub score: u8,
    pub trend: Trend,
}

/// Direction of a quality metric over recent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitivity_accepts_both_spellings() {
        let upper: Sensitivity = serde_json::from_str("\"High\"").unwrap();
        let lower: Sensitivity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(upper, Sensitivity::High);
        assert_eq!(lower, Sensitivity::High);
    }

    #[test]
    fn product_serializes_camel_case() {
        let product = Product {
            id: 1,
            name: "Test".to_string(),
            description: "A test product".to_string(),
            owner: "Team".to_string(),
            domain: "Testing".to_string(),
            update_frequency: "Daily".to_string(),
            sensitivity: Sensitivity::Low,
            quality: 50,
            columns: vec![Column {
                name: "field_a".to_string(),
                data_type: "string".to_string(),
                sensitivity: Sensitivity::Low,
                description: "First field".to_string(),
            }],
            usage: None,
            metrics: None,
            cost: None,
            lineage: None,
            logs: Vec::new(),
            failed_jobs: Vec::new(),
            data_quality: Vec::new(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["updateFrequency"], "Daily");
        assert_eq!(json["columns"][0]["type"], "string");
        // Absent payloads are omitted entirely, not serialized as null.
        assert!(json.get("usage").is_none());
        assert!(json.get("failedJobs").is_none());
    }

    #[test]
    fn product_deserializes_without_payloads() {
        let json = r#"{
            "id": 7,
            "name": "Minimal",
            "description": "Bare product",
            "owner": "Team",
            "domain": "Testing",
            "updateFrequency": "Weekly",
            "sensitivity": "Medium",
            "quality": 70,
            "columns": [
                {"name": "k", "type": "string", "sensitivity": "low", "description": "key"}
            ]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert!(product.usage.is_none());
        assert!(product.logs.is_empty());
        assert_eq!(product.columns[0].sensitivity, Sensitivity::Low);
    }
}
