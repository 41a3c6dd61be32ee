//! Structural equality comparison over heterogeneous value graphs
//!
//! The comparer decides whether two arbitrary values should be treated as
//! equal for domain purposes even when plain `==` would not consider them
//! equal: two distinct containers holding equal elements, or two distinct
//! objects whose business-relevant fields match.
//!
//! Rust has no ambient runtime reflection, so values enter the comparer as an
//! explicit tagged union, [`Comparable`]. Plain data types opt in to
//! structural comparison by implementing the [`Equatable`] capability, which
//! exposes the ordered sequence of sub-values that determine their identity.
//!
//! ```
//! use opskit_core::equality::{are_same, Comparable};
//!
//! let a = Comparable::seq([Comparable::text("x"), Comparable::text("y")]);
//! let b = Comparable::seq([Comparable::text("x"), Comparable::text("y")]);
//! assert!(are_same(&a, &b));
//! ```
//!
//! Inputs are assumed acyclic; there is no visited-set guard, so a cyclic
//! `Arc` graph would recurse without bound.

mod compare;
mod value;

pub use compare::{are_same, are_same_keyed, are_same_ordered};
pub use value::{Comparable, Equatable};
