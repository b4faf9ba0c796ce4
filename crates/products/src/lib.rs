//! Products domain module.
//!
//! This crate contains the catalog's value objects and their validation rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod product;
pub mod rating;

pub use category::Category;
pub use product::Product;
pub use rating::Rating;
