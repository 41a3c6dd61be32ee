//! The comparable value model
//!
//! [`Comparable`] classifies every value handed to the comparer into one of
//! the shapes the decision procedure dispatches on: absent, scalar, ordered
//! container, keyed container, equatable object, or opaque.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opt-in capability for structural comparison of plain objects
///
/// A type implementing `Equatable` exposes the ordered, finite sequence of
/// sub-values that determine its identity. Fields left out of the sequence do
/// not participate in comparison.
///
/// `as_any` provides runtime type identity; implementations return `self`.
/// Two objects of different concrete types are never the same, regardless of
/// their components.
pub trait Equatable: Send + Sync {
    /// The ordered sub-values used for comparison, in caller-defined order
    fn equality_components(&self) -> Vec<Comparable>;

    /// Runtime type identity hook; implement as `self`
    fn as_any(&self) -> &dyn Any;
}

/// A value classified for structural comparison
///
/// Containers own their elements; objects and opaque values are shared
/// through `Arc` so reference identity survives cloning.
#[derive(Clone)]
pub enum Comparable {
    /// The absent value (`null`)
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Ordered container, compared element-by-element by position
    Seq(Vec<Comparable>),
    /// Keyed container; entries keep their enumeration order
    Map(Vec<(Comparable, Comparable)>),
    /// A value carrying the [`Equatable`] capability
    Object(Arc<dyn Equatable>),
    /// A value with no structural path; only reference identity applies
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Comparable {
    pub fn text(value: impl Into<String>) -> Self {
        Comparable::Text(value.into())
    }

    pub fn int(value: i64) -> Self {
        Comparable::Int(value)
    }

    pub fn seq(items: impl IntoIterator<Item = Comparable>) -> Self {
        Comparable::Seq(items.into_iter().collect())
    }

    pub fn map(entries: impl IntoIterator<Item = (Comparable, Comparable)>) -> Self {
        Comparable::Map(entries.into_iter().collect())
    }

    /// Wrap a value carrying the [`Equatable`] capability
    pub fn object(value: impl Equatable + 'static) -> Self {
        Comparable::Object(Arc::new(value))
    }

    /// Wrap a shared equatable without re-boxing, preserving identity
    pub fn shared_object(value: Arc<dyn Equatable>) -> Self {
        Comparable::Object(value)
    }

    /// Wrap a value with no structural comparison path
    pub fn opaque(value: impl Any + Send + Sync) -> Self {
        Comparable::Opaque(Arc::new(value))
    }

    /// Wrap a shared opaque value, preserving identity across clones
    pub fn shared_opaque(value: Arc<dyn Any + Send + Sync>) -> Self {
        Comparable::Opaque(value)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Comparable::Absent)
    }
}

impl From<bool> for Comparable {
    fn from(value: bool) -> Self {
        Comparable::Bool(value)
    }
}

impl From<i32> for Comparable {
    fn from(value: i32) -> Self {
        Comparable::Int(value.into())
    }
}

impl From<i64> for Comparable {
    fn from(value: i64) -> Self {
        Comparable::Int(value)
    }
}

impl From<f64> for Comparable {
    fn from(value: f64) -> Self {
        Comparable::Float(value)
    }
}

impl From<&str> for Comparable {
    fn from(value: &str) -> Self {
        Comparable::Text(value.to_string())
    }
}

impl From<String> for Comparable {
    fn from(value: String) -> Self {
        Comparable::Text(value)
    }
}

impl From<Vec<Comparable>> for Comparable {
    fn from(items: Vec<Comparable>) -> Self {
        Comparable::Seq(items)
    }
}

impl<T: Into<Comparable>> From<Option<T>> for Comparable {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Comparable::Absent,
        }
    }
}

impl fmt::Debug for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparable::Absent => write!(f, "Absent"),
            Comparable::Bool(v) => write!(f, "Bool({v})"),
            Comparable::Int(v) => write!(f, "Int({v})"),
            Comparable::Float(v) => write!(f, "Float({v})"),
            Comparable::Text(v) => write!(f, "Text({v:?})"),
            Comparable::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Comparable::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Comparable::Object(obj) => {
                write!(f, "Object({:?})", obj.as_any().type_id())
            }
            Comparable::Opaque(_) => write!(f, "Opaque(..)"),
        }
    }
}
