//! Infrastructure layer: the in-memory catalog store and its configuration.

pub mod catalog_store;
pub mod config;


pub use catalog_store::{CatalogStore, InMemoryCatalogStore};
pub use config::{CatalogConfig, ConfigError};
