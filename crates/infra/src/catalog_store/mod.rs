//! Catalog store: the single owner of product records.

pub mod in_memory;

pub use in_memory::InMemoryCatalogStore;

use std::sync::Arc;

use chrono::NaiveDate;

use catalog_core::{DomainResult, ProductId};
use catalog_products::{Category, Product};

/// Store of catalog products.
///
/// Every returned `Product` is an owned snapshot; holding one never observes
/// later writes and cannot affect stored state.
pub trait CatalogStore: Send + Sync {
    /// Validate and insert a new product under the next unused identifier.
    fn create(
        &self,
        name: &str,
        category: Category,
        rating: i32,
        created_date: NaiveDate,
    ) -> DomainResult<Product>;

    /// Replace name, category and rating of an existing product, stamping the
    /// modification date with the store clock's current date.
    ///
    /// Fails with `NotFound` for an unknown id, and with `Validation` for a
    /// blank name, a rating outside `[0, 10]`, or when the clock's date is
    /// earlier than the product's creation date (the modification date may
    /// never precede creation). The store is unchanged on failure.
    fn update(
        &self,
        id: ProductId,
        name: &str,
        category: Category,
        rating: i32,
    ) -> DomainResult<Product>;

    /// All products, in no particular order.
    fn all(&self) -> Vec<Product>;

    fn get(&self, id: ProductId) -> Option<Product>;

    /// Products of one category, sorted by name.
    fn by_category(&self, category: Category) -> Vec<Product>;

    /// Products created strictly after `date`.
    fn created_after(&self, date: NaiveDate) -> Vec<Product>;

    /// Products whose modification date differs from their creation date.
    fn modified(&self) -> Vec<Product>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn create(
        &self,
        name: &str,
        category: Category,
        rating: i32,
        created_date: NaiveDate,
    ) -> DomainResult<Product> {
        (**self).create(name, category, rating, created_date)
    }

    fn update(
        &self,
        id: ProductId,
        name: &str,
        category: Category,
        rating: i32,
    ) -> DomainResult<Product> {
        (**self).update(id, name, category, rating)
    }

    fn all(&self) -> Vec<Product> {
        (**self).all()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn by_category(&self, category: Category) -> Vec<Product> {
        (**self).by_category(category)
    }

    fn created_after(&self, date: NaiveDate) -> Vec<Product> {
        (**self).created_after(date)
    }

    fn modified(&self) -> Vec<Product> {
        (**self).modified()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
