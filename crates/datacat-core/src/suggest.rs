//! Intent-driven product suggestions.
//!
//! Suggestions come from a fixed, ordered rule table. Each rule fires
//! independently when one of its trigger keywords occurs in the
//! lowercased query, and appends zero or more [`Suggestion`]s to an
//! accumulator. Canned rules push hardcoded shortlists; the pricing and
//! sensitivity rules walk the live catalog. Every triggered rule runs to
//! completion and the accumulator is truncated to [`MAX_SUGGESTIONS`]
//! afterwards, so rule order decides who survives the cap.
//!
//! A suggestion points at a product by name equality only; there is no
//! enforced foreign key between `title` and the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::Sensitivity;

/// Maximum suggestions returned per query.
pub const MAX_SUGGESTIONS: usize = 3;

/// Column-name fragments treated as pricing-related by the dynamic
/// pricing rule.
const PRICING_FRAGMENTS: &[&str] = &["price", "amount", "cost"];

/// What kind of recommendation a suggestion is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Table,
    Pricing,
    Sensitivity,
}

/// An ephemeral, query-derived recommendation pointing (by name) at a
/// product. Built per call and discarded once the caller consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Expected to equal some product's `name`; lookup is by equality.
    pub title: String,
    pub description: String,
    /// Column names backing the recommendation.
    pub columns: Vec<String>,
    /// Human-readable explanation of why this product was suggested.
    pub reasoning: String,
}

/// One entry in the suggestion rule table.
struct SuggestRule {
    /// Any of these occurring in the query triggers the rule.
    keywords: &'static [&'static str],
    action: Action,
}

/// What a triggered rule contributes to the accumulator.
enum Action {
    /// Push these fixed entries verbatim, not derived from the catalog.
    Canned(&'static [Canned]),
    /// Per product, its columns named with a pricing fragment.
    PricingColumns,
    /// Per High-sensitivity product, its High-sensitivity columns.
    SensitiveColumns,
}

/// A hardcoded suggestion payload.
struct Canned {
    kind: SuggestionKind,
    title: &'static str,
    description: &'static str,
    columns: &'static [&'static str],
    reasoning: &'static str,
}

const CUSTOMER_360: Canned = Canned {
    kind: SuggestionKind::Table,
    title: "Customer 360",
    description: "Unified customer profile with identity, contact, and engagement attributes",
    columns: &["customer_id", "full_name", "email", "phone_number", "segment"],
    reasoning: "The query mentions customer or personal data, and this table is the canonical customer profile",
};

const BALANCE_SHEET: Canned = Canned {
    kind: SuggestionKind::Table,
    title: "Balance Sheet",
    description: "Daily consolidated balance sheet positions for liquidity reporting",
    columns: &["account_id", "ledger_date", "asset_class", "closing_balance"],
    reasoning: "Financial reporting queries usually start from the consolidated balance sheet",
};

const DERIVATIVES: Canned = Canned {
    kind: SuggestionKind::Table,
    title: "Derivatives and Collaterals",
    description: "Open derivative trades with reconciled collateral positions",
    columns: &["trade_id", "counterparty", "notional", "collateral_value"],
    reasoning: "Derivative and collateral exposure lives in this trade-level table",
};

const INVENTORY: Canned = Canned {
    kind: SuggestionKind::Table,
    title: "Inventory Snapshot",
    description: "Hourly stock levels per warehouse with unit economics",
    columns: &["sku", "product_name", "warehouse", "quantity_on_hand"],
    reasoning: "Product and stock questions are answered by the hourly inventory snapshot",
};

const TRANSACTIONS: Canned = Canned {
    kind: SuggestionKind::Table,
    title: "Sales Transactions",
    description: "Line-item retail transactions captured at the point of sale",
    columns: &["transaction_id", "unit_price", "quantity", "total_amount"],
    reasoning: "Sales and revenue analysis starts from the point-of-sale transaction feed",
};

/// The suggestion rule table. Rules are evaluated top to bottom; within
/// a dynamic rule, products contribute in catalog order.
const SUGGEST_RULES: &[SuggestRule] = &[
    SuggestRule {
        keywords: &["customer", "personal"],
        action: Action::Canned(&[CUSTOMER_360]),
    },
    SuggestRule {
        keywords: &["financial", "balance", "regulatory"],
        action: Action::Canned(&[BALANCE_SHEET, DERIVATIVES]),
    },
    SuggestRule {
        keywords: &["inventory", "product"],
        action: Action::Canned(&[INVENTORY]),
    },
    SuggestRule {
        keywords: &["sales", "transaction", "revenue"],
        action: Action::Canned(&[TRANSACTIONS]),
    },
    // The derivatives entry repeats under its own trigger words. A query
    // containing keywords from both this rule and the financial rule
    // accumulates it twice, and both copies compete for the cap.
    SuggestRule {
        keywords: &["derivative", "collateral"],
        action: Action::Canned(&[DERIVATIVES]),
    },
    SuggestRule {
        keywords: &["pricing", "price"],
        action: Action::PricingColumns,
    },
    SuggestRule {
        keywords: &["sensitive", "high sensitivity"],
        action: Action::SensitiveColumns,
    },
];

/// Generate up to [`MAX_SUGGESTIONS`] suggestions for `query`.
///
/// An empty or all-whitespace query yields no suggestions. Pure and
/// deterministic; accepts any string input.
pub fn suggest(catalog: &Catalog, query: &str) -> Vec<Suggestion> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();

    let mut suggestions = Vec::new();
    for rule in SUGGEST_RULES {
        if rule.keywords.iter().any(|k| query.contains(k)) {
            rule.action.append(catalog, &mut suggestions);
        }
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

impl Action {
    fn append(&self, catalog: &Catalog, out: &mut Vec<Suggestion>) {
        match self {
            Action::Canned(entries) => {
                for entry in *entries {
                    out.push(Suggestion {
                        kind: entry.kind,
                        title: entry.title.to_string(),
                        description: entry.description.to_string(),
                        columns: entry.columns.iter().map(|c| c.to_string()).collect(),
                        reasoning: entry.reasoning.to_string(),
                    });
                }
            }
            Action::PricingColumns => {
                for product in catalog.all() {
                    let matching: Vec<String> = product
                        .columns
                        .iter()
                        .filter(|c| {
                            let name = c.name.to_lowercase();
                            PRICING_FRAGMENTS.iter().any(|f| name.contains(f))
                        })
                        .map(|c| c.name.clone())
                        .collect();
                    if matching.is_empty() {
                        continue;
                    }
                    out.push(Suggestion {
                        kind: SuggestionKind::Pricing,
                        title: product.name.clone(),
                        description: product.description.clone(),
                        reasoning: format!(
                            "Has {} column(s) named with price, amount, or cost",
                            matching.len()
                        ),
                        columns: matching,
                    });
                }
            }
            Action::SensitiveColumns => {
                for product in catalog.all() {
                    if product.sensitivity != Sensitivity::High {
                        continue;
                    }
                    let restricted: Vec<String> = product
                        .columns
                        .iter()
                        .filter(|c| c.sensitivity == Sensitivity::High)
                        .map(|c| c.name.clone())
                        .collect();
                    if restricted.is_empty() {
                        continue;
                    }
                    out.push(Suggestion {
                        kind: SuggestionKind::Sensitivity,
                        title: product.name.clone(),
                        description: product.description.clone(),
                        reasoning: format!(
                            "Classified High sensitivity with {} restricted column(s)",
                            restricted.len()
                        ),
                        columns: restricted,
                    });
                }
            }
        }
    }
}
