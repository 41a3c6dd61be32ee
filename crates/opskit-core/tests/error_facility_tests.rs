#![allow(clippy::unwrap_used, clippy::expect_used)]

use opskit_core::errors::ErrorCategory;
use opskit_core::format::{format_with_named_placeholders, parse_invariant};
use opskit_core::ApplicationError;
use serde_json::json;

#[test]
fn detail_placeholders_fill_in_order_of_first_appearance() {
    let err = ApplicationError::functional("Transfer rejected").with_detail(
        "Cannot move {Amount} from {Source} to {Target}: {Source} is frozen",
        [json!(250), json!("ACC-1"), json!("ACC-2")],
    );
    assert_eq!(
        err.detail_message().as_deref(),
        Some("Cannot move 250 from ACC-1 to ACC-2: ACC-1 is frozen"),
    );
}

#[test]
fn technical_detail_renders_independently() {
    let err = ApplicationError::technical("Storage unavailable")
        .with_detail("The order could not be saved", [])
        .with_technical_detail(
            "Write to {Table} failed after {Attempts} attempts",
            [json!("orders"), json!(3)],
        );
    assert_eq!(
        err.detail_message().as_deref(),
        Some("The order could not be saved"),
    );
    assert_eq!(
        err.technical_message().as_deref(),
        Some("Write to orders failed after 3 attempts"),
    );
}

#[test]
fn full_message_joins_the_chain_with_spaces() {
    let err = ApplicationError::functional("Error 1")
        .with_detail("Error message 1", [])
        .with_inner(
            ApplicationError::functional("Error 2")
                .with_detail("Error 2", [])
                .with_inner(
                    ApplicationError::technical("Error 3")
                        .with_detail("Hello {Name} 4", [json!("world")]),
                ),
        );
    assert_eq!(err.full_message(), "Error message 1 Error 2 Hello world 4");
}

#[test]
fn full_message_falls_back_to_titles() {
    let err = ApplicationError::functional("Outer title")
        .with_inner(ApplicationError::technical("Inner title"));
    assert_eq!(err.full_message(), "Outer title Inner title");
}

#[test]
fn serde_round_trip_keeps_the_whole_chain() {
    let err = ApplicationError::new(ErrorCategory::Functional, "Order rejected")
        .with_detail("Item {Item} is out of stock", [json!("bolt-m8")])
        .with_technical_detail("Inventory row {Id} is stale", [json!(42)])
        .with_inner(ApplicationError::technical("Cache miss"));

    let json = serde_json::to_string(&err).unwrap();
    let back: ApplicationError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
    assert_eq!(back.inner().unwrap().title(), "Cache miss");
}

#[test]
fn error_chain_is_visible_through_std_error_source() {
    use std::error::Error as _;

    let err = ApplicationError::functional("outer")
        .with_inner(ApplicationError::technical("middle").with_inner(
            ApplicationError::new(ErrorCategory::Unknown, "root cause"),
        ));

    let mut source: Option<&dyn std::error::Error> = err.source();
    let mut seen = Vec::new();
    while let Some(e) = source {
        seen.push(e.to_string());
        source = e.source();
    }
    assert_eq!(seen.len(), 2);
    assert!(seen[0].contains("middle"));
    assert!(seen[1].contains("root cause"));
}

#[test]
fn parse_invariant_failure_is_a_technical_error() {
    let err = parse_invariant::<i32>("not a number").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Technical);
    assert!(err.technical_message().unwrap().contains("not a number"));
}

#[test]
fn template_formatting_matches_error_rendering() {
    // Both paths share the same renderer.
    let template = "Value {X} and again {X}";
    let args = [json!("v")];
    let direct = format_with_named_placeholders(template, &args);
    let via_error = ApplicationError::functional("t")
        .with_detail(template, args)
        .detail_message()
        .unwrap();
    assert_eq!(direct, via_error);
    assert_eq!(direct, "Value v and again v");
}
