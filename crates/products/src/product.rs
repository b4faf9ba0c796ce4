use chrono::NaiveDate;
use serde::Serialize;

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::category::Category;
use crate::rating::Rating;

/// Catalog product: an immutable, validated value.
///
/// There is no way to obtain a `Product` that violates its invariants: every
/// constructor validates, fields are private, and "changing" a product means
/// building a new one via [`Product::revise`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    rating: Rating,
    created_date: NaiveDate,
    last_modified_date: NaiveDate,
}

impl Product {
    /// Build a product from raw field values, validating all of them.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        created_date: NaiveDate,
        last_modified_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name can't be empty"));
        }

        let rating = Rating::new(rating)?;

        if last_modified_date < created_date {
            return Err(DomainError::validation(format!(
                "last modified date {last_modified_date} precedes created date {created_date}"
            )));
        }

        Ok(Self {
            id,
            name,
            category,
            rating,
            created_date,
            last_modified_date,
        })
    }

    /// A freshly created product: both dates equal `created_date`.
    pub fn create(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        created_date: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(id, name, category, rating, created_date, created_date)
    }

    /// Replacement value for an update: keeps `id` and `created_date`, stamps
    /// `last_modified_date` with `today`.
    pub fn revise(
        &self,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(self.id, name, category, rating, self.created_date, today)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    pub fn last_modified_date(&self) -> NaiveDate {
        self.last_modified_date
    }

    /// A product counts as modified once its modification date moved off its creation date.
    pub fn is_modified(&self) -> bool {
        self.last_modified_date != self.created_date
    }
}
