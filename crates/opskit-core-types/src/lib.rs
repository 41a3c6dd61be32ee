//! Core types shared across opskit facilities
//!
//! This crate provides foundational pieces used by the error handling,
//! logging and higher-level helper crates:
//!
//! - **Unique IDs**: random and datetime-based string identifiers
//! - **Schema constants**: canonical field keys and event names for logging
//! - **Month**: calendar month enum with stable numeric values

pub mod ids;
pub mod month;
pub mod schema;

pub use ids::{generate_date_time_id, generate_unique_id};
pub use month::Month;
