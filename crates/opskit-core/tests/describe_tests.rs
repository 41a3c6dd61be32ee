#![allow(clippy::unwrap_used, clippy::expect_used)]

use opskit_core::describe::{
    create_example, describe, describe_properties, Described, PropertyMetadata, TypeMetadata,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
struct ExampleObject {
    string_value: String,
    int_value: i64,
    string_default: String,
    untouched: String,
}

impl Default for ExampleObject {
    fn default() -> Self {
        Self {
            string_value: String::new(),
            int_value: 0,
            string_default: String::new(),
            untouched: "instance default".to_string(),
        }
    }
}

impl Described for ExampleObject {
    fn metadata() -> TypeMetadata {
        TypeMetadata::new("ExampleObject")
            .with_display(Some("Example object"), Some("An object used as an example"))
            .with_property(PropertyMetadata::new("string_value").with_example(json!("Hello")))
            .with_property(PropertyMetadata::new("int_value").with_example(json!(10)))
            .with_property(PropertyMetadata::new("string_default").with_default(json!("string")))
            .with_property(PropertyMetadata::new("untouched"))
    }
}

#[test]
fn example_uses_declared_example_values() {
    let example: ExampleObject = create_example().unwrap();
    assert_eq!(example.string_value, "Hello");
    assert_eq!(example.int_value, 10);
}

#[test]
fn example_falls_back_to_declared_default() {
    let example: ExampleObject = create_example().unwrap();
    assert_eq!(example.string_default, "string");
}

#[test]
fn example_keeps_instance_defaults_for_undeclared_values() {
    let example: ExampleObject = create_example().unwrap();
    assert_eq!(example.untouched, "instance default");
}

#[test]
fn type_description_resolves_from_the_display_pair() {
    let desc = describe::<ExampleObject>();
    assert_eq!(desc.type_name, "ExampleObject");
    assert_eq!(desc.display_name, "Example object");
    assert_eq!(desc.description, "An object used as an example");
}

#[test]
fn property_descriptions_humanize_undecorated_names() {
    let props = describe_properties::<ExampleObject>();
    assert_eq!(props["string_value"].display_name, "String value");
    assert_eq!(props["int_value"].display_name, "Int value");
    assert_eq!(props["string_default"].default_value, Some(json!("string")));
}

#[test]
fn property_display_pair_beats_standalone_attributes() {
    struct Decorated;
    impl Described for Decorated {
        fn metadata() -> TypeMetadata {
            TypeMetadata::new("Decorated").with_property(
                PropertyMetadata::new("value")
                    .with_display(Some("Pair name"), Some("Pair description"))
                    .with_display_name("Standalone name")
                    .with_description("Standalone description"),
            )
        }
    }

    let props = describe_properties::<Decorated>();
    assert_eq!(props["value"].display_name, "Pair name");
    assert_eq!(props["value"].description, "Pair description");
}

#[test]
fn required_flag_survives_resolution() {
    struct WithRequired;
    impl Described for WithRequired {
        fn metadata() -> TypeMetadata {
            TypeMetadata::new("WithRequired")
                .with_property(PropertyMetadata::new("needed").required())
                .with_property(PropertyMetadata::new("optional"))
        }
    }

    let props = describe_properties::<WithRequired>();
    assert!(props["needed"].required);
    assert!(!props["optional"].required);
}
