//! Declarative object and property description metadata
//!
//! The surrounding system wants a display name, a description, defaults and
//! example values for its data types (settings sections, command DTOs).
//! Types opt in by implementing [`Described`] and building a [`TypeMetadata`]
//! by hand — the declarative stand-in for attribute reflection.
//!
//! Resolution precedence, for both types and properties:
//! 1. the name/description pair declared together (`with_display`)
//! 2. the standalone display name (`with_display_name`)
//! 3. the humanized identifier
//!
//! and for the description, the standalone description (`with_description`)
//! slots in between 2 and 3; a type with no description falls back to its
//! resolved display name.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ApplicationError, Result};
use crate::format::humanize;

/// A name/description pair declared together, either half optional
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayMetadata {
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
}

/// Raw description metadata for a type
#[derive(Debug, Clone)]
pub struct TypeMetadata {
    type_name: &'static str,
    mapped_name: Option<&'static str>,
    display: DisplayMetadata,
    display_name: Option<&'static str>,
    description: Option<&'static str>,
    properties: Vec<PropertyMetadata>,
}

impl TypeMetadata {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            mapped_name: None,
            display: DisplayMetadata::default(),
            display_name: None,
            description: None,
            properties: Vec::new(),
        }
    }

    /// Override the type name used in maps and registries
    pub fn with_mapped_name(mut self, name: &'static str) -> Self {
        self.mapped_name = Some(name);
        self
    }

    pub fn with_display(
        mut self,
        name: Option<&'static str>,
        description: Option<&'static str>,
    ) -> Self {
        self.display = DisplayMetadata { name, description };
        self
    }

    pub fn with_display_name(mut self, name: &'static str) -> Self {
        self.display_name = Some(name);
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(&self) -> &[PropertyMetadata] {
        &self.properties
    }
}

/// Raw description metadata for one property
///
/// `name` must match the serde field name so example creation can overlay
/// values onto the serialized form.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    name: &'static str,
    display: DisplayMetadata,
    display_name: Option<&'static str>,
    description: Option<&'static str>,
    default_value: Option<serde_json::Value>,
    required: bool,
    example: Option<serde_json::Value>,
}

impl PropertyMetadata {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            display: DisplayMetadata::default(),
            display_name: None,
            description: None,
            default_value: None,
            required: false,
            example: None,
        }
    }

    pub fn with_display(
        mut self,
        name: Option<&'static str>,
        description: Option<&'static str>,
    ) -> Self {
        self.display = DisplayMetadata { name, description };
        self
    }

    pub fn with_display_name(mut self, name: &'static str) -> Self {
        self.display_name = Some(name);
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_example(mut self, value: serde_json::Value) -> Self {
        self.example = Some(value);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Capability for types that carry description metadata
pub trait Described {
    fn metadata() -> TypeMetadata;
}

/// Resolved description of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescription {
    pub type_name: String,
    pub display_name: String,
    pub description: String,
}

/// Resolved description of a property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescription {
    pub display_name: String,
    pub description: String,
    pub default_value: Option<serde_json::Value>,
    pub required: bool,
}

/// Resolve the description of a type, applying the precedence rules
pub fn describe<T: Described>() -> TypeDescription {
    let meta = T::metadata();
    let type_name = meta.mapped_name.unwrap_or(meta.type_name).to_string();

    let display_name = meta
        .display
        .name
        .or(meta.display_name)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(meta.type_name));

    let description = meta
        .display
        .description
        .or(meta.description)
        .map(str::to_string)
        .unwrap_or_else(|| display_name.clone());

    TypeDescription {
        type_name,
        display_name,
        description,
    }
}

/// Resolve the descriptions of all declared properties, keyed by name
pub fn describe_properties<T: Described>() -> BTreeMap<String, PropertyDescription> {
    T::metadata()
        .properties
        .into_iter()
        .map(|p| (p.name.to_string(), resolve_property(p)))
        .collect()
}

/// Build an example instance of a described type
///
/// The default instance is serialized, each property's example value (or its
/// declared default, if no example exists) is overlaid, and the result is
/// deserialized back. Properties without example or default keep the value
/// the default instance already had.
pub fn create_example<T>() -> Result<T>
where
    T: Described + Default + Serialize + DeserializeOwned,
{
    let mut value = serde_json::to_value(T::default()).map_err(serde_error::<T>)?;

    if let serde_json::Value::Object(ref mut fields) = value {
        for property in T::metadata().properties {
            let sample = property.example.or(property.default_value);
            if let Some(sample) = sample {
                fields.insert(property.name.to_string(), sample);
            }
        }
    }

    serde_json::from_value(value).map_err(serde_error::<T>)
}

fn resolve_property(meta: PropertyMetadata) -> PropertyDescription {
    let display_name = meta
        .display
        .name
        .or(meta.display_name)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(meta.name));

    let description = meta
        .display
        .description
        .or(meta.description)
        .map(str::to_string)
        .unwrap_or_else(|| display_name.clone());

    PropertyDescription {
        display_name,
        description,
        default_value: meta.default_value,
        required: meta.required,
    }
}

fn serde_error<T>(err: serde_json::Error) -> ApplicationError {
    ApplicationError::technical("Example creation failed").with_technical_detail(
        "Cannot build an example of {Type}: {Reason}",
        [
            serde_json::json!(std::any::type_name::<T>()),
            serde_json::json!(err.to_string()),
        ],
    )
}
