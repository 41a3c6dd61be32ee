//! opskit core - cross-cutting commons for services
//!
//! This crate provides the shared utility facilities used across the
//! surrounding system:
//! - Structural (deep) equality comparison over heterogeneous value graphs
//! - Structured application errors with categories and message templates
//! - Declarative object/property description metadata
//! - String and number formatting helpers
//! - Structured logging facility with test capture
//! - Idempotency marker trait and small math helpers
//!
//! Settings binding lives in the sibling `opskit-settings` crate; unique ID
//! generation and logging schema constants live in `opskit-core-types`.

pub mod describe;
pub mod equality;
pub mod errors;
pub mod format;
pub mod idempotent;
pub mod logging_facility;
pub mod maths;

// Re-export commonly used types
pub use equality::{are_same, are_same_keyed, are_same_ordered, Comparable, Equatable};
pub use errors::{ApplicationError, ErrorCategory, Result};
pub use idempotent::Idempotent;
