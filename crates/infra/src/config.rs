//! Configuration loading and representation.
//!
//! Configuration comes from environment variables only.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use catalog_core::{Clock, FixedClock, SystemClock};

use crate::catalog_store::InMemoryCatalogStore;

/// Pins the store clock to a fixed `YYYY-MM-DD` date when set.
pub const TODAY_VAR: &str = "CATALOG_TODAY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a YYYY-MM-DD date (got '{value}'): {reason}")]
    InvalidDate {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Date reported by the store clock; `None` means the local wall-clock date.
    pub today: Option<NaiveDate>,
}

impl CatalogConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let today = match lookup(TODAY_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                    ConfigError::InvalidDate {
                        var: TODAY_VAR,
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                tracing::info!(today = %date, "store clock pinned by {TODAY_VAR}");
                Some(date)
            }
            _ => None,
        };

        Ok(Self { today })
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(date) => Arc::new(FixedClock::new(date)),
            None => Arc::new(SystemClock),
        }
    }

    /// An empty store wired to the configured clock.
    pub fn build_store(&self) -> InMemoryCatalogStore<Arc<dyn Clock>> {
        InMemoryCatalogStore::with_clock(self.clock())
    }
}
