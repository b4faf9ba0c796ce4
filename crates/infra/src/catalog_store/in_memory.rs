use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use catalog_core::{Clock, DomainError, DomainResult, ProductId, SystemClock};
use catalog_products::{Category, Product};

use super::CatalogStore;

#[derive(Debug)]
struct Catalog {
    products: HashMap<ProductId, Product>,
    next_id: ProductId,
}

impl Catalog {
    fn new() -> Self {
        Self {
            products: HashMap::new(),
            next_id: ProductId::FIRST,
        }
    }

    fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| predicate(*p))
            .cloned()
            .collect()
    }
}

/// In-memory catalog store.
///
/// One `RwLock` guards both the product map and the identifier counter, so
/// identifier assignment and insertion happen as a single step. Linear scans
/// only; no secondary indexes.
#[derive(Debug)]
pub struct InMemoryCatalogStore<C = SystemClock> {
    inner: RwLock<Catalog>,
    clock: C,
}

impl InMemoryCatalogStore<SystemClock> {
    /// Store stamping modifications with the local wall-clock date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryCatalogStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryCatalogStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inner: RwLock::new(Catalog::new()),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // Writers replace whole entries, so a poisoned lock never guards a
    // half-applied change.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> CatalogStore for InMemoryCatalogStore<C> {
    fn create(
        &self,
        name: &str,
        category: Category,
        rating: i32,
        created_date: NaiveDate,
    ) -> DomainResult<Product> {
        let mut catalog = self.write();
        let id = catalog.next_id;

        let product = Product::create(id, name, category, rating, created_date)
            .inspect_err(|e| tracing::warn!(%category, error = %e, "rejected product creation"))?;

        catalog.next_id = id.next()?;
        catalog.products.insert(id, product.clone());

        tracing::info!(product_id = %id, %category, %created_date, "product created");
        Ok(product)
    }

    fn update(
        &self,
        id: ProductId,
        name: &str,
        category: Category,
        rating: i32,
    ) -> DomainResult<Product> {
        let today = self.clock.today();
        let mut catalog = self.write();

        let existing = catalog.products.get(&id).ok_or_else(|| {
            tracing::warn!(product_id = %id, "update of unknown product");
            DomainError::not_found(format!("product not found: {id}"))
        })?;

        let revised = existing
            .revise(name, category, rating, today)
            .inspect_err(|e| tracing::warn!(product_id = %id, error = %e, "rejected product update"))?;

        catalog.products.insert(id, revised.clone());

        tracing::info!(product_id = %id, %category, last_modified = %today, "product updated");
        Ok(revised)
    }

    fn all(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }

    fn by_category(&self, category: Category) -> Vec<Product> {
        let mut products = self.read().select(|p| p.category() == category);
        products.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
        tracing::debug!(%category, count = products.len(), "category query");
        products
    }

    fn created_after(&self, date: NaiveDate) -> Vec<Product> {
        self.read().select(|p| p.created_date() > date)
    }

    fn modified(&self) -> Vec<Product> {
        self.read().select(Product::is_modified)
    }

    fn len(&self) -> usize {
        self.read().products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_at(today: NaiveDate) -> InMemoryCatalogStore<FixedClock> {
        InMemoryCatalogStore::with_clock(FixedClock::new(today))
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryCatalogStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.modified().is_empty());
    }

    #[test]
    fn identifiers_start_at_one_and_increase() {
        let store = store_at(date(2024, 1, 1));
        let a = store.create("A", Category::PcGame, 1, date(2023, 1, 1)).unwrap();
        let b = store.create("B", Category::PcGame, 2, date(2023, 1, 1)).unwrap();
        assert_eq!(a.id(), ProductId::new(1));
        assert_eq!(b.id(), ProductId::new(2));
    }

    #[test]
    fn failed_create_does_not_consume_an_identifier() {
        let store = store_at(date(2024, 1, 1));
        let a = store.create("A", Category::PcGame, 1, date(2023, 1, 1)).unwrap();
        assert!(store.create("", Category::PcGame, 1, date(2023, 1, 1)).is_err());
        let b = store.create("B", Category::PcGame, 1, date(2023, 1, 1)).unwrap();
        assert_eq!(b.id(), a.id().next().unwrap());
    }

    #[test]
    fn update_uses_injected_clock() {
        let today = date(2024, 5, 17);
        let store = store_at(today);
        let created = store.create("A", Category::PcGame, 1, date(2023, 1, 1)).unwrap();

        let updated = store.update(created.id(), "B", Category::XboxGame, 2).unwrap();
        assert_eq!(updated.last_modified_date(), today);
        assert_eq!(store.clock().today(), today);
    }

    #[test]
    fn by_category_breaks_name_ties_by_id() {
        let store = store_at(date(2024, 1, 1));
        let first = store.create("Same", Category::PcGame, 1, date(2023, 1, 1)).unwrap();
        let second = store.create("Same", Category::PcGame, 2, date(2023, 1, 1)).unwrap();

        let ids: Vec<_> = store.by_category(Category::PcGame).iter().map(Product::id).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }

    #[test]
    fn by_category_orders_case_sensitively() {
        let store = store_at(date(2024, 1, 1));
        store.create("alpha", Category::PcGame, 1, date(2023, 1, 1)).unwrap();
        store.create("Bravo", Category::PcGame, 1, date(2023, 1, 1)).unwrap();

        let names: Vec<String> = store
            .by_category(Category::PcGame)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bravo", "alpha"]);
    }

    #[test]
    fn works_through_shared_handle() {
        let store: std::sync::Arc<dyn CatalogStore> = std::sync::Arc::new(store_at(date(2024, 1, 1)));
        let created = store.create("Shared", Category::PlaystationGame, 3, date(2023, 1, 1)).unwrap();
        assert_eq!(store.get(created.id()), Some(created));
        assert_eq!(store.len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 200,
                ..ProptestConfig::default()
            })]

            /// Property: identifiers strictly increase across a mix of valid and invalid creates.
            #[test]
            fn identifiers_strictly_increase(
                ratings in prop::collection::vec(-3i32..14, 1..40),
            ) {
                let store = store_at(date(2024, 1, 1));
                let mut last: Option<ProductId> = None;
                for rating in ratings {
                    if let Ok(product) = store.create("Item", Category::PcGame, rating, date(2023, 1, 1)) {
                        if let Some(previous) = last {
                            prop_assert!(product.id() > previous);
                        }
                        last = Some(product.id());
                    }
                }
            }

            /// Property: category query is exactly the matching subset, sorted by name.
            #[test]
            fn by_category_is_sorted_subset(
                entries in prop::collection::vec(("[A-Za-z]{1,8}", category()), 0..30),
                wanted in category(),
            ) {
                let store = store_at(date(2024, 1, 1));
                for (name, category) in &entries {
                    store.create(name, *category, 5, date(2023, 1, 1)).unwrap();
                }

                let result = store.by_category(wanted);
                let expected = entries.iter().filter(|(_, c)| *c == wanted).count();
                prop_assert_eq!(result.len(), expected);
                prop_assert!(result.iter().all(|p| p.category() == wanted));
                prop_assert!(result.windows(2).all(|w| w[0].name() <= w[1].name()));
            }

            /// Property: created_after is a strict threshold.
            #[test]
            fn created_after_is_strict(
                offsets in prop::collection::vec(0i64..60, 0..30),
                threshold_offset in 0i64..60,
            ) {
                let base = date(2023, 1, 1);
                let store = store_at(date(2024, 1, 1));
                for offset in &offsets {
                    store.create("Item", Category::XboxGame, 5, base + chrono::Duration::days(*offset)).unwrap();
                }

                let threshold = base + chrono::Duration::days(threshold_offset);
                let result = store.created_after(threshold);
                let expected = offsets.iter().filter(|o| **o > threshold_offset).count();
                prop_assert_eq!(result.len(), expected);
                prop_assert!(result.iter().all(|p| p.created_date() > threshold));
            }
        }
    }
}
