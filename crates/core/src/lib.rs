//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO besides
//! the wall-clock read behind [`SystemClock`]).

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
