//! Immutable product catalog with read-only lookup.
//!
//! The [`Catalog`] is constructed once at startup from whatever supplies
//! the product sequence (the built-in sample dataset or a JSON file) and
//! is never written to afterwards. Iteration order is the definition
//! order of the underlying list, and every accessor returns borrows into
//! that list.

use anyhow::{bail, Result};
use std::collections::HashSet;

use crate::models::Product;

/// The fixed set of products the search and suggestion engines read from.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Fails if two products share an id; ids are the lookup key for
    /// detail views and must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                bail!("duplicate product id: {}", product.id);
            }
        }
        Ok(Self { products })
    }

    /// All products, in definition order. Same order every call.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    ///
    /// Absence is a routine outcome (a stale bookmark or deep link), so
    /// it is signaled as `None` rather than an error.
    pub fn by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
