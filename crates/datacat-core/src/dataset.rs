//! Built-in sample dataset: a small banking-flavored product catalog.
//!
//! This is the fixed literal data the demo runs on when no catalog file
//! is configured. The engines treat it like any other catalog; nothing
//! in here is special-cased.

use chrono::{TimeZone, Utc};

use crate::catalog::Catalog;
use crate::models::{
    Column, Cost, FailedJob, Lineage, LogEntry, Metrics, Product, QualityMetric, Sensitivity,
    Trend, Usage,
};

fn col(name: &str, data_type: &str, sensitivity: Sensitivity, description: &str) -> Column {
    Column {
        name: name.to_string(),
        data_type: data_type.to_string(),
        sensitivity,
        description: description.to_string(),
    }
}

/// The sample catalog. Ids are assigned in definition order.
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_products()).expect("sample dataset has unique ids")
}

/// The sample product list backing [`sample_catalog`].
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Customer 360".to_string(),
            description: "Unified view of every customer: identity, contact, segmentation, \
                          and lifetime engagement rolled up from CRM, billing, and support \
                          systems."
                .to_string(),
            owner: "CRM Data Team".to_string(),
            domain: "Customer Analytics".to_string(),
            update_frequency: "Daily".to_string(),
            sensitivity: Sensitivity::High,
            quality: 92,
            columns: vec![
                col(
                    "customer_id",
                    "number",
                    Sensitivity::High,
                    "Primary identifier assigned at onboarding",
                ),
                col(
                    "full_name",
                    "string",
                    Sensitivity::High,
                    "Legal name as registered",
                ),
                col(
                    "email",
                    "string",
                    Sensitivity::High,
                    "Primary contact address",
                ),
                col(
                    "phone_number",
                    "number",
                    Sensitivity::High,
                    "Verified mobile contact",
                ),
                col(
                    "segment",
                    "string",
                    Sensitivity::Low,
                    "Marketing segment label",
                ),
                col(
                    "lifetime_value",
                    "number",
                    Sensitivity::Medium,
                    "Projected lifetime engagement score",
                ),
                col(
                    "signup_date",
                    "string",
                    Sensitivity::Low,
                    "Date the relationship opened",
                ),
            ],
            usage: Some(Usage {
                views_per_month: 1840,
                queries_per_month: 12400,
                top_consumers: vec![
                    "Marketing Activation".to_string(),
                    "Churn Modeling".to_string(),
                    "Support Console".to_string(),
                ],
                last_accessed: Utc.with_ymd_and_hms(2025, 7, 14, 9, 42, 0).unwrap(),
            }),
            metrics: Some(Metrics {
                row_count: 4_812_330,
                size_gb: 38.5,
                freshness_pct: 99.2,
            }),
            cost: Some(Cost {
                storage_usd: 412.0,
                compute_usd: 1188.0,
                total_usd: 1600.0,
            }),
            lineage: Some(Lineage {
                upstream: vec![
                    "crm_contacts".to_string(),
                    "billing_accounts".to_string(),
                    "support_tickets".to_string(),
                ],
                transformations: vec![
                    "identity_resolution".to_string(),
                    "segment_scoring".to_string(),
                ],
                downstream: vec![
                    "churn_model_features".to_string(),
                    "campaign_audiences".to_string(),
                ],
            }),
            logs: vec![
                LogEntry {
                    timestamp: Utc.with_ymd_and_hms(2025, 7, 14, 4, 0, 12).unwrap(),
                    level: "INFO".to_string(),
                    message: "Daily build completed in 14m 02s".to_string(),
                },
                LogEntry {
                    timestamp: Utc.with_ymd_and_hms(2025, 7, 13, 4, 0, 9).unwrap(),
                    level: "WARN".to_string(),
                    message: "12 rows dropped by identity resolution".to_string(),
                },
            ],
            failed_jobs: vec![FailedJob {
                job: "segment_scoring_backfill".to_string(),
                failed_at: Utc.with_ymd_and_hms(2025, 7, 2, 4, 18, 44).unwrap(),
                error: "upstream crm_contacts snapshot missing".to_string(),
            }],
            data_quality: vec![
                QualityMetric {
                    metric: "Completeness".to_string(),
                    score: 96,
                    trend: Trend::Up,
                },
                QualityMetric {
                    metric: "Uniqueness".to_string(),
                    score: 99,
                    trend: Trend::Stable,
                },
                QualityMetric {
                    metric: "Timeliness".to_string(),
                    score: 91,
                    trend: Trend::Down,
                },
            ],
        },
        Product {
            id: 2,
            name: "Balance Sheet".to_string(),
            description: "Daily consolidated balance sheet positions prepared for FR 2052A \
                          liquidity reporting and internal treasury review."
                .to_string(),
            owner: "Regulatory Reporting".to_string(),
            domain: "Finance".to_string(),
            update_frequency: "Daily".to_string(),
            sensitivity: Sensitivity::High,
            quality: 97,
            columns: vec![
                col(
                    "account_id",
                    "string",
                    Sensitivity::Medium,
                    "General ledger account",
                ),
                col(
                    "ledger_date",
                    "string",
                    Sensitivity::Low,
                    "Position date",
                ),
                col(
                    "asset_class",
                    "string",
                    Sensitivity::Low,
                    "Level 1 asset classification",
                ),
                col(
                    "closing_balance",
                    "number",
                    Sensitivity::High,
                    "End-of-day position in reporting currency",
                ),
                col("currency", "string", Sensitivity::Low, "ISO 4217 code"),
            ],
            usage: Some(Usage {
                views_per_month: 640,
                queries_per_month: 2210,
                top_consumers: vec![
                    "Treasury".to_string(),
                    "Liquidity Risk".to_string(),
                ],
                last_accessed: Utc.with_ymd_and_hms(2025, 7, 14, 6, 5, 0).unwrap(),
            }),
            metrics: Some(Metrics {
                row_count: 912_040,
                size_gb: 4.2,
                freshness_pct: 100.0,
            }),
            cost: Some(Cost {
                storage_usd: 55.0,
                compute_usd: 340.0,
                total_usd: 395.0,
            }),
            lineage: Some(Lineage {
                upstream: vec!["general_ledger".to_string(), "fx_rates".to_string()],
                transformations: vec![
                    "consolidation".to_string(),
                    "fr2052a_mapping".to_string(),
                ],
                downstream: vec!["fr2052a_submission".to_string()],
            }),
            logs: Vec::new(),
            failed_jobs: Vec::new(),
            data_quality: vec![
                QualityMetric {
                    metric: "Completeness".to_string(),
                    score: 100,
                    trend: Trend::Stable,
                },
                QualityMetric {
                    metric: "Accuracy".to_string(),
                    score: 98,
                    trend: Trend::Up,
                },
            ],
        },
        Product {
            id: 3,
            name: "Derivatives and Collaterals".to_string(),
            description: "Open derivative trades with collateral positions, sourced from the \
                          trading floor and reconciled for FR 2052A supplemental schedules."
                .to_string(),
            owner: "Markets Technology".to_string(),
            domain: "Finance".to_string(),
            update_frequency: "Intraday".to_string(),
            sensitivity: Sensitivity::High,
            quality: 88,
            columns: vec![
                col(
                    "trade_id",
                    "string",
                    Sensitivity::Medium,
                    "Front-office trade reference",
                ),
                col(
                    "counterparty",
                    "string",
                    Sensitivity::High,
                    "Legal entity on the other side",
                ),
                col(
                    "notional",
                    "number",
                    Sensitivity::High,
                    "Trade notional in reporting currency",
                ),
                col(
                    "collateral_value",
                    "number",
                    Sensitivity::High,
                    "Posted collateral marked to market",
                ),
                col(
                    "maturity_date",
                    "date",
                    Sensitivity::Low,
                    "Contract maturity",
                ),
                col(
                    "settlement_status",
                    "string",
                    Sensitivity::Low,
                    "Pending, settled, or disputed",
                ),
            ],
            usage: None,
            metrics: Some(Metrics {
                row_count: 182_550,
                size_gb: 2.8,
                freshness_pct: 97.4,
            }),
            cost: None,
            lineage: Some(Lineage {
                upstream: vec![
                    "murex_trades".to_string(),
                    "collateral_mgmt".to_string(),
                ],
                transformations: vec!["trade_reconciliation".to_string()],
                downstream: vec![
                    "fr2052a_supplemental".to_string(),
                    "exposure_dashboard".to_string(),
                ],
            }),
            logs: Vec::new(),
            failed_jobs: vec![FailedJob {
                job: "intraday_reconciliation".to_string(),
                failed_at: Utc.with_ymd_and_hms(2025, 7, 11, 13, 2, 17).unwrap(),
                error: "collateral_mgmt feed timed out after 3 retries".to_string(),
            }],
            data_quality: vec![QualityMetric {
                metric: "Reconciliation".to_string(),
                score: 88,
                trend: Trend::Down,
            }],
        },
        Product {
            id: 4,
            name: "Inventory Snapshot".to_string(),
            description: "Hourly stock levels per warehouse with unit economics for \
                          replenishment planning."
                .to_string(),
            owner: "Operations Engineering".to_string(),
            domain: "Supply Chain".to_string(),
            update_frequency: "Hourly".to_string(),
            sensitivity: Sensitivity::Low,
            quality: 78,
            columns: vec![
                col("sku", "string", Sensitivity::Low, "Stock keeping unit"),
                col(
                    "product_name",
                    "string",
                    Sensitivity::Low,
                    "Display name of the item",
                ),
                col(
                    "warehouse",
                    "string",
                    Sensitivity::Low,
                    "Fulfillment site code",
                ),
                col(
                    "quantity_on_hand",
                    "string",
                    Sensitivity::Low,
                    "Units available at snapshot time",
                ),
                col(
                    "unit_cost",
                    "number",
                    Sensitivity::Medium,
                    "Landed cost per unit",
                ),
            ],
            usage: Some(Usage {
                views_per_month: 310,
                queries_per_month: 5400,
                top_consumers: vec!["Replenishment Planner".to_string()],
                last_accessed: Utc.with_ymd_and_hms(2025, 7, 14, 11, 0, 0).unwrap(),
            }),
            metrics: Some(Metrics {
                row_count: 64_200,
                size_gb: 0.6,
                freshness_pct: 93.1,
            }),
            cost: None,
            lineage: None,
            logs: vec![LogEntry {
                timestamp: Utc.with_ymd_and_hms(2025, 7, 14, 11, 0, 3).unwrap(),
                level: "INFO".to_string(),
                message: "Snapshot 2025-07-14T11:00 loaded".to_string(),
            }],
            failed_jobs: Vec::new(),
            data_quality: Vec::new(),
        },
        Product {
            id: 5,
            name: "Sales Transactions".to_string(),
            description: "Line-item retail transactions captured at the point of sale, \
                          enriched with promotion and payment metadata."
                .to_string(),
            owner: "Revenue Platform".to_string(),
            domain: "Sales".to_string(),
            update_frequency: "Streaming".to_string(),
            sensitivity: Sensitivity::Medium,
            quality: 85,
            columns: vec![
                col(
                    "transaction_id",
                    "string",
                    Sensitivity::Low,
                    "Globally unique receipt reference",
                ),
                col(
                    "customer_id",
                    "number",
                    Sensitivity::Medium,
                    "Purchaser, when identified",
                ),
                col(
                    "unit_price",
                    "number",
                    Sensitivity::Low,
                    "Per-unit amount before discounts",
                ),
                col("quantity", "number", Sensitivity::Low, "Units sold"),
                col(
                    "total_amount",
                    "number",
                    Sensitivity::Low,
                    "Line total after discounts",
                ),
                col(
                    "payment_method",
                    "string",
                    Sensitivity::Medium,
                    "Tender type",
                ),
                col(
                    "transaction_date",
                    "date",
                    Sensitivity::Low,
                    "Capture timestamp",
                ),
            ],
            usage: Some(Usage {
                views_per_month: 2250,
                queries_per_month: 48700,
                top_consumers: vec![
                    "Revenue Reporting".to_string(),
                    "Demand Forecasting".to_string(),
                ],
                last_accessed: Utc.with_ymd_and_hms(2025, 7, 14, 11, 58, 0).unwrap(),
            }),
            metrics: Some(Metrics {
                row_count: 98_441_020,
                size_gb: 412.0,
                freshness_pct: 99.9,
            }),
            cost: Some(Cost {
                storage_usd: 2150.0,
                compute_usd: 4100.0,
                total_usd: 6250.0,
            }),
            lineage: Some(Lineage {
                upstream: vec!["pos_events".to_string(), "promo_engine".to_string()],
                transformations: vec!["dedup".to_string(), "currency_normalization".to_string()],
                downstream: vec!["daily_revenue_mart".to_string()],
            }),
            logs: Vec::new(),
            failed_jobs: Vec::new(),
            data_quality: vec![QualityMetric {
                metric: "Freshness".to_string(),
                score: 99,
                trend: Trend::Stable,
            }],
        },
        Product {
            id: 6,
            name: "Market Data Feed".to_string(),
            description: "Consolidated bid and ask quotes with end-of-day closes across \
                          listed venues."
                .to_string(),
            owner: "Markets Technology".to_string(),
            domain: "Finance".to_string(),
            update_frequency: "Real-time".to_string(),
            sensitivity: Sensitivity::Medium,
            quality: 95,
            columns: vec![
                col(
                    "instrument_id",
                    "string",
                    Sensitivity::Low,
                    "Exchange symbol or ISIN",
                ),
                col("venue", "string", Sensitivity::Low, "Source exchange"),
                col("bid_price", "number", Sensitivity::Low, "Best bid"),
                col("ask_price", "number", Sensitivity::Low, "Best ask"),
                col(
                    "close_price",
                    "number",
                    Sensitivity::Low,
                    "Official end-of-day close",
                ),
                col("quote_time", "date", Sensitivity::Low, "Quote timestamp"),
            ],
            usage: None,
            metrics: Some(Metrics {
                row_count: 1_204_500_000,
                size_gb: 1890.0,
                freshness_pct: 99.99,
            }),
            cost: None,
            lineage: None,
            logs: Vec::new(),
            failed_jobs: Vec::new(),
            data_quality: Vec::new(),
        },
        Product {
            id: 7,
            name: "Employee Directory".to_string(),
            description: "Active employee roster with reporting lines and office assignments."
                .to_string(),
            owner: "People Systems".to_string(),
            domain: "Human Resources".to_string(),
            update_frequency: "Weekly".to_string(),
            sensitivity: Sensitivity::Medium,
            quality: 81,
            columns: vec![
                col(
                    "employee_id",
                    "string",
                    Sensitivity::Medium,
                    "Badge number",
                ),
                col(
                    "full_name",
                    "string",
                    Sensitivity::Medium,
                    "Preferred display name",
                ),
                col("department", "string", Sensitivity::Low, "Org unit"),
                col("job_title", "string", Sensitivity::Low, "Current role"),
                col(
                    "office_location",
                    "string",
                    Sensitivity::Low,
                    "Assigned site",
                ),
            ],
            usage: None,
            metrics: None,
            cost: None,
            lineage: None,
            logs: Vec::new(),
            failed_jobs: Vec::new(),
            data_quality: Vec::new(),
        },
        Product {
            id: 8,
            name: "Clickstream Events".to_string(),
            description: "Raw web and mobile interaction events for funnel and attribution \
                          analysis."
                .to_string(),
            owner: "Digital Analytics".to_string(),
            domain: "Marketing".to_string(),
            update_frequency: "Streaming".to_string(),
            sensitivity: Sensitivity::Low,
            quality: 73,
            columns: vec![
                col("event_id", "string", Sensitivity::Low, "Event UUID"),
                col(
                    "session_id",
                    "string",
                    Sensitivity::Low,
                    "Browser session",
                ),
                col("page_url", "string", Sensitivity::Low, "Visited page"),
                col(
                    "event_type",
                    "string",
                    Sensitivity::Low,
                    "Click, view, or scroll",
                ),
                col("event_time", "date", Sensitivity::Low, "Capture timestamp"),
                col(
                    "device_class",
                    "string",
                    Sensitivity::Low,
                    "Desktop, mobile, or tablet",
                ),
            ],
            usage: Some(Usage {
                views_per_month: 140,
                queries_per_month: 9100,
                top_consumers: vec!["Attribution Pipeline".to_string()],
                last_accessed: Utc.with_ymd_and_hms(2025, 7, 13, 22, 14, 0).unwrap(),
            }),
            metrics: Some(Metrics {
                row_count: 7_730_000_000,
                size_gb: 5400.0,
                freshness_pct: 98.7,
            }),
            cost: None,
            lineage: None,
            logs: Vec::new(),
            failed_jobs: Vec::new(),
            data_quality: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_builds() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn every_product_has_columns() {
        for product in sample_catalog().all() {
            assert!(
                !product.columns.is_empty(),
                "product {} has no columns",
                product.name
            );
        }
    }

    #[test]
    fn column_names_unique_within_each_product() {
        for product in sample_catalog().all() {
            let mut names: Vec<&str> = product.columns.iter().map(|c| c.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(
                names.len(),
                product.columns.len(),
                "duplicate column in {}",
                product.name
            );
        }
    }

    #[test]
    fn quality_scores_in_range() {
        for product in sample_catalog().all() {
            assert!(product.quality <= 100);
            for metric in &product.data_quality {
                assert!(metric.score <= 100);
            }
        }
    }
}
