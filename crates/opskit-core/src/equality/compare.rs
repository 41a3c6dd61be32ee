//! The recursive comparison procedure
//!
//! A pure decision procedure with no state and no error paths. The decision
//! order, first match wins:
//!
//! 1. `a` absent: result is "`b` also absent"
//! 2. `b` absent: false
//! 3. native equality: true
//! 4. different runtime shape: false
//! 5. keyed container: compare key and value sequences
//! 6. ordered container: compare element-by-element
//! 7. equatable object: compare the two component sequences
//! 8. otherwise: false

use std::mem;
use std::sync::Arc;

use super::value::Comparable;

/// Decide whether two values are structurally the same
///
/// Total over all inputs; never panics on well-formed values. A panicking
/// [`Equatable`](super::Equatable) implementation propagates to the caller.
pub fn are_same(a: &Comparable, b: &Comparable) -> bool {
    if a.is_absent() {
        return b.is_absent();
    }
    if b.is_absent() {
        return false;
    }
    if native_equality(a, b) {
        return true;
    }
    if !same_runtime_shape(a, b) {
        return false;
    }

    match (a, b) {
        (Comparable::Map(x), Comparable::Map(y)) => are_same_keyed(Some(&x[..]), Some(&y[..])),
        (Comparable::Seq(x), Comparable::Seq(y)) => are_same_ordered(Some(&x[..]), Some(&y[..])),
        (Comparable::Object(x), Comparable::Object(y)) => {
            let x_components = x.equality_components();
            let y_components = y.equality_components();
            are_same_ordered(Some(&x_components[..]), Some(&y_components[..]))
        }
        // Scalars already failed native equality; opaque values have no
        // structural path beyond identity.
        _ => false,
    }
}

/// Compare two keyed containers
///
/// The key collection and the value collection of each container are compared
/// as two independently ordered sequences; entries are not matched up by key.
/// Containers holding equal entries in different enumeration order therefore
/// compare as different. This mirrors the long-standing behavior downstream
/// callers rely on and is deliberately not "fixed" here.
pub fn are_same_keyed(
    a: Option<&[(Comparable, Comparable)]>,
    b: Option<&[(Comparable, Comparable)]>,
) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (None, Some(_)) | (Some(_), None) => return false,
        (Some(a), Some(b)) => (a, b),
    };

    let a_keys: Vec<Comparable> = a.iter().map(|(k, _)| k.clone()).collect();
    let b_keys: Vec<Comparable> = b.iter().map(|(k, _)| k.clone()).collect();
    let a_values: Vec<Comparable> = a.iter().map(|(_, v)| v.clone()).collect();
    let b_values: Vec<Comparable> = b.iter().map(|(_, v)| v.clone()).collect();

    are_same_ordered(Some(&a_keys[..]), Some(&b_keys[..]))
        && are_same_ordered(Some(&a_values[..]), Some(&b_values[..]))
}

/// Compare two ordered sequences element-by-element
///
/// A length mismatch is a difference; any element mismatch short-circuits.
/// Recursion depth is bounded by the nesting depth of the inputs.
pub fn are_same_ordered(a: Option<&[Comparable]>, b: Option<&[Comparable]>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (None, Some(_)) | (Some(_), None) => return false,
        (Some(a), Some(b)) => (a, b),
    };

    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| are_same(x, y))
}

// Native equality: the same referent, or scalar value equality. Containers
// and objects that are not reference-identical fall through to the
// structural paths.
fn native_equality(a: &Comparable, b: &Comparable) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Comparable::Bool(x), Comparable::Bool(y)) => x == y,
        (Comparable::Int(x), Comparable::Int(y)) => x == y,
        // Bit equality keeps a NaN-carrying value the same as itself.
        (Comparable::Float(x), Comparable::Float(y)) => x == y || x.to_bits() == y.to_bits(),
        (Comparable::Text(x), Comparable::Text(y)) => x == y,
        (Comparable::Object(x), Comparable::Object(y)) => {
            std::ptr::addr_eq(Arc::as_ptr(x), Arc::as_ptr(y))
        }
        (Comparable::Opaque(x), Comparable::Opaque(y)) => {
            std::ptr::addr_eq(Arc::as_ptr(x), Arc::as_ptr(y))
        }
        _ => false,
    }
}

// Runtime shape check: enum variant kind, and concrete type for objects.
fn same_runtime_shape(a: &Comparable, b: &Comparable) -> bool {
    if mem::discriminant(a) != mem::discriminant(b) {
        return false;
    }
    match (a, b) {
        (Comparable::Object(x), Comparable::Object(y)) => {
            x.as_any().type_id() == y.as_any().type_id()
        }
        (Comparable::Opaque(x), Comparable::Opaque(y)) => x.type_id() == y.type_id(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_same_as_absent_only() {
        assert!(are_same(&Comparable::Absent, &Comparable::Absent));
        assert!(!are_same(&Comparable::Absent, &Comparable::int(1)));
        assert!(!are_same(&Comparable::int(1), &Comparable::Absent));
    }

    #[test]
    fn test_scalar_native_equality() {
        assert!(are_same(&Comparable::int(42), &Comparable::int(42)));
        assert!(!are_same(&Comparable::int(42), &Comparable::int(43)));
        assert!(are_same(&Comparable::text("a"), &Comparable::text("a")));
    }

    #[test]
    fn test_cross_type_is_never_same() {
        assert!(!are_same(&Comparable::int(1), &Comparable::text("1")));
        assert!(!are_same(&Comparable::Bool(true), &Comparable::int(1)));
        assert!(!are_same(&Comparable::Int(1), &Comparable::Float(1.0)));
    }

    #[test]
    fn test_nan_is_same_as_itself() {
        let nan = Comparable::Float(f64::NAN);
        assert!(are_same(&nan, &nan.clone()));
    }

    #[test]
    fn test_negative_zero_equals_positive_zero() {
        assert!(are_same(&Comparable::Float(0.0), &Comparable::Float(-0.0)));
    }

    #[test]
    fn test_ordered_length_mismatch() {
        let short = vec![Comparable::int(1)];
        let long = vec![Comparable::int(1), Comparable::int(2)];
        assert!(!are_same_ordered(Some(&short[..]), Some(&long[..])));
    }

    #[test]
    fn test_ordered_absent_handling() {
        let empty: &[Comparable] = &[];
        assert!(are_same_ordered(None, None));
        assert!(!are_same_ordered(None, Some(empty)));
        assert!(!are_same_ordered(Some(empty), None));
        assert!(are_same_ordered(Some(empty), Some(empty)));
    }

    #[test]
    fn test_keyed_absent_handling() {
        let empty: &[(Comparable, Comparable)] = &[];
        assert!(are_same_keyed(None, None));
        assert!(!are_same_keyed(None, Some(empty)));
        assert!(!are_same_keyed(Some(empty), None));
        assert!(are_same_keyed(Some(empty), Some(empty)));
    }

    #[test]
    fn test_opaque_identity_only() {
        let shared: std::sync::Arc<dyn std::any::Any + Send + Sync> =
            std::sync::Arc::new("payload".to_string());
        let a = Comparable::shared_opaque(shared.clone());
        let b = Comparable::shared_opaque(shared);
        assert!(are_same(&a, &b));

        let c = Comparable::opaque("payload".to_string());
        let d = Comparable::opaque("payload".to_string());
        assert!(!are_same(&c, &d));
    }
}
