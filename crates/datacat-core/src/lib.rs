//! # DataCat Core
//!
//! Shared logic for DataCat: product models, the immutable catalog
//! store, the keyword filter, and the suggestion engine.
//!
//! This crate does no I/O, holds no mutable state, and has no async
//! runtime dependency. Every search call is a pure function of the
//! catalog contents and the query string, so calls are independent and
//! idempotent; debouncing and stale-result handling belong to whatever
//! interactive shell sits in front of it.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Product`, `Column`, sensitivity and payload types |
//! | [`catalog`] | Immutable store with `all()` and `by_id()` |
//! | [`search`] | Keyword filter with the intent rule table |
//! | [`suggest`] | Suggestion engine, capped at 3 entries per query |
//! | [`dataset`] | Built-in sample product data |

pub mod catalog;
pub mod dataset;
pub mod models;
pub mod search;
pub mod suggest;

pub use catalog::Catalog;
pub use models::{Column, Product, Sensitivity};
pub use search::filter;
pub use suggest::{suggest, Suggestion, SuggestionKind, MAX_SUGGESTIONS};
