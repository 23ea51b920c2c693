//! Keyword filtering over the product catalog.
//!
//! A product matches a query when any of three predicate families holds:
//!
//! 1. Substring containment of the query in its `name`, `description`,
//!    or `domain`.
//! 2. Substring containment of the query in any column's `name` or
//!    `description`.
//! 3. An [intent rule](IntentRule) fires: the rule's trigger keyword
//!    occurs in the query and the product satisfies the rule's condition.
//!
//! All matching is raw, case-insensitive substring containment with no
//! word-boundary logic, so the query `rice` matches a `unit_price`
//! column. The result is a stable filter of the catalog: store order,
//! no re-ranking.

use crate::catalog::Catalog;
use crate::models::{Product, Sensitivity};

/// A keyword-triggered inclusion heuristic.
///
/// When `keyword` occurs anywhere in the lowercased query, a product is
/// included if any one of `conditions` holds for it.
struct IntentRule {
    keyword: &'static str,
    conditions: &'static [Condition],
}

/// Product-side condition of an intent rule. Needles are stored
/// lowercased; fields are lowercased at evaluation time.
enum Condition {
    NameContains(&'static str),
    DomainContains(&'static str),
    DescriptionContains(&'static str),
    ColumnNameContains(&'static str),
    SensitivityIs(Sensitivity),
}

/// The fixed intent rule table, evaluated alongside the substring
/// predicates. Kept as data so rules can be added without touching the
/// match loop.
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        keyword: "customer",
        conditions: &[
            Condition::NameContains("customer"),
            Condition::ColumnNameContains("customer"),
        ],
    },
    IntentRule {
        keyword: "financial",
        conditions: &[
            Condition::DomainContains("finance"),
            Condition::NameContains("balance"),
        ],
    },
    IntentRule {
        keyword: "inventory",
        conditions: &[Condition::NameContains("inventory")],
    },
    IntentRule {
        keyword: "transaction",
        conditions: &[Condition::NameContains("transaction")],
    },
    IntentRule {
        keyword: "sensitive",
        conditions: &[Condition::SensitivityIs(Sensitivity::High)],
    },
    IntentRule {
        keyword: "regulatory",
        conditions: &[Condition::DescriptionContains("fr 2052a")],
    },
    IntentRule {
        keyword: "derivative",
        conditions: &[Condition::NameContains("derivative")],
    },
    IntentRule {
        keyword: "pricing",
        conditions: &[Condition::ColumnNameContains("price")],
    },
];

impl Condition {
    fn matches(&self, product: &Product) -> bool {
        match self {
            Condition::NameContains(needle) => product.name.to_lowercase().contains(needle),
            Condition::DomainContains(needle) => product.domain.to_lowercase().contains(needle),
            Condition::DescriptionContains(needle) => {
                product.description.to_lowercase().contains(needle)
            }
            Condition::ColumnNameContains(needle) => product
                .columns
                .iter()
                .any(|c| c.name.to_lowercase().contains(needle)),
            Condition::SensitivityIs(level) => product.sensitivity == *level,
        }
    }
}

/// Filter the catalog down to the products matching `query`.
///
/// An empty or all-whitespace query returns the full catalog. The call
/// is a pure function of the catalog contents and the query string:
/// no side effects, no error conditions, any string input accepted.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    if query.trim().is_empty() {
        return catalog.all().iter().collect();
    }
    let query = query.to_lowercase();
    catalog
        .all()
        .iter()
        .filter(|p| matches_query(p, &query))
        .collect()
}

fn matches_query(product: &Product, query: &str) -> bool {
    if field_match(product, query) || column_match(product, query) {
        return true;
    }
    INTENT_RULES.iter().any(|rule| {
        query.contains(rule.keyword) && rule.conditions.iter().any(|c| c.matches(product))
    })
}

fn field_match(product: &Product, query: &str) -> bool {
    product.name.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
        || product.domain.to_lowercase().contains(query)
}

fn column_match(product: &Product, query: &str) -> bool {
    product.columns.iter().any(|c| {
        c.name.to_lowercase().contains(query) || c.description.to_lowercase().contains(query)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_catalog;

    fn names(results: &[&Product]) -> Vec<String> {
        results.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let catalog = sample_catalog();
        let all = filter(&catalog, "");
        assert_eq!(all.len(), catalog.len());
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        let store_ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, store_ids);

        let whitespace = filter(&catalog, "   \t ");
        assert_eq!(whitespace.len(), catalog.len());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = sample_catalog();
        let upper = names(&filter(&catalog, "BALANCE"));
        let lower = names(&filter(&catalog, "balance"));
        assert_eq!(upper, lower);
        assert!(upper.contains(&"Balance Sheet".to_string()));
    }

    #[test]
    fn raw_substring_containment_has_no_word_boundaries() {
        // "rice" is a substring of "price", so every product with a
        // price-named column matches.
        let catalog = sample_catalog();
        let results = names(&filter(&catalog, "rice"));
        assert!(results.contains(&"Sales Transactions".to_string()));
        assert!(results.contains(&"Market Data Feed".to_string()));
        assert!(!results.contains(&"Customer 360".to_string()));
    }

    #[test]
    fn sensitive_intent_selects_exactly_high_products() {
        let catalog = sample_catalog();
        let results = filter(&catalog, "sensitive");
        let expected: Vec<u32> = catalog
            .all()
            .iter()
            .filter(|p| p.sensitivity == Sensitivity::High)
            .map(|p| p.id)
            .collect();
        let got: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(got, expected);
        assert!(!got.is_empty());
    }

    #[test]
    fn regulatory_intent_matches_fr_2052a_descriptions() {
        let catalog = sample_catalog();
        let results = names(&filter(&catalog, "regulatory"));
        assert_eq!(
            results,
            vec![
                "Balance Sheet".to_string(),
                "Derivatives and Collaterals".to_string()
            ]
        );
    }

    #[test]
    fn financial_intent_matches_finance_domain_and_balance_names() {
        let catalog = sample_catalog();
        let results = names(&filter(&catalog, "financial"));
        assert_eq!(
            results,
            vec![
                "Balance Sheet".to_string(),
                "Derivatives and Collaterals".to_string(),
                "Market Data Feed".to_string()
            ]
        );
    }

    #[test]
    fn customer_intent_includes_column_level_hits() {
        let catalog = sample_catalog();
        let results = names(&filter(&catalog, "customer"));
        // Customer 360 by name, Sales Transactions by its customer_id column.
        assert!(results.contains(&"Customer 360".to_string()));
        assert!(results.contains(&"Sales Transactions".to_string()));
    }

    #[test]
    fn intent_keyword_fires_inside_longer_queries() {
        let catalog = sample_catalog();
        let results = names(&filter(&catalog, "show me sensitive datasets"));
        assert!(results.contains(&"Customer 360".to_string()));
        assert!(results.contains(&"Derivatives and Collaterals".to_string()));
    }

    #[test]
    fn no_match_returns_empty() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "zzz_nonexistent_keyword").is_empty());
    }

    #[test]
    fn result_order_is_store_order() {
        let catalog = sample_catalog();
        let results = filter(&catalog, "financial");
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "filter must not re-rank");
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = sample_catalog();
        let first: Vec<u32> = filter(&catalog, "pricing").iter().map(|p| p.id).collect();
        let second: Vec<u32> = filter(&catalog, "pricing").iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }
}
