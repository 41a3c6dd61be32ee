#![allow(clippy::unwrap_used, clippy::expect_used)]

use opskit_core::{are_same, Comparable};
use proptest::prelude::*;

/// Arbitrary comparable values: scalar leaves plus nested sequences and
/// keyed containers, a few levels deep.
fn arb_comparable() -> impl Strategy<Value = Comparable> {
    let leaf = prop_oneof![
        Just(Comparable::Absent),
        any::<bool>().prop_map(Comparable::Bool),
        any::<i64>().prop_map(Comparable::Int),
        any::<f64>().prop_map(Comparable::Float),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Comparable::Text),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Comparable::Seq),
            prop::collection::vec((inner.clone(), inner), 0..4).prop_map(Comparable::Map),
        ]
    })
}

proptest! {
    #[test]
    fn same_value_through_a_clone_is_reflexive(a in arb_comparable()) {
        let b = a.clone();
        prop_assert!(are_same(&a, &b));
    }

    #[test]
    fn comparison_is_symmetric(a in arb_comparable(), b in arb_comparable()) {
        prop_assert_eq!(are_same(&a, &b), are_same(&b, &a));
    }

    #[test]
    fn wrapping_in_a_sequence_preserves_the_verdict(
        a in arb_comparable(),
        b in arb_comparable(),
    ) {
        let wrapped_a = Comparable::seq([a.clone()]);
        let wrapped_b = Comparable::seq([b.clone()]);
        prop_assert_eq!(are_same(&a, &b), are_same(&wrapped_a, &wrapped_b));
    }

    #[test]
    fn sequences_of_different_length_are_never_same(
        items in prop::collection::vec(arb_comparable(), 0..4),
        extra in arb_comparable(),
    ) {
        let shorter = Comparable::seq(items.clone());
        let mut longer_items = items;
        longer_items.push(extra);
        let longer = Comparable::seq(longer_items);
        prop_assert!(!are_same(&shorter, &longer));
    }

    #[test]
    fn absent_only_matches_absent(a in arb_comparable()) {
        let expected = a.is_absent();
        prop_assert_eq!(are_same(&a, &Comparable::Absent), expected);
        prop_assert_eq!(are_same(&Comparable::Absent, &a), expected);
    }
}
