//! String and number formatting helpers
//!
//! Locale-free by construction: numeric conversions go through Rust's
//! `Display`/`FromStr`, which never consult the environment.

use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{ApplicationError, Result};

/// Render a template whose `{Name}` placeholders are filled positionally
///
/// Placeholder names are assigned argument positions in order of first
/// appearance; every occurrence of a name is replaced with the same argument.
/// Surplus arguments are ignored; a placeholder without an argument is left
/// in place.
///
/// ```
/// use opskit_core::format::format_with_named_placeholders;
/// use serde_json::json;
///
/// let out = format_with_named_placeholders(
///     "Say {Hello} {Number} times",
///     &[json!("hello world"), json!(11)],
/// );
/// assert_eq!(out, "Say hello world 11 times");
/// ```
pub fn format_with_named_placeholders(template: &str, arguments: &[serde_json::Value]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for name in placeholder_names(template) {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let mut result = template.to_string();
    for (index, name) in names.iter().enumerate() {
        let Some(value) = arguments.get(index) else {
            break;
        };
        result = result.replace(&format!("{{{name}}}"), &render_argument(value));
    }
    result
}

/// Turn an identifier into a human-readable sentence
///
/// Handles PascalCase, camelCase and snake_case: the first word is
/// capitalized, the rest lowercased.
///
/// ```
/// assert_eq!(opskit_core::format::humanize("NoAttributesTest"), "No attributes test");
/// assert_eq!(opskit_core::format::humanize("string_value"), "String value");
/// ```
pub fn humanize(identifier: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in identifier.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut sentence = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            sentence.push(' ');
        }
        for (j, c) in word.chars().enumerate() {
            if i == 0 && j == 0 {
                sentence.extend(c.to_uppercase());
            } else {
                sentence.extend(c.to_lowercase());
            }
        }
    }
    sentence
}

/// Convert a number to its locale-free string representation
pub fn to_invariant_string(value: impl Display) -> String {
    value.to_string()
}

/// Parse a locale-free string back into a number
///
/// A parse failure is reported as a technical application error naming the
/// offending text.
pub fn parse_invariant<T>(text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse::<T>().map_err(|e| {
        ApplicationError::technical("Invalid number").with_technical_detail(
            "Cannot parse '{Text}': {Reason}",
            [serde_json::json!(text), serde_json::json!(e.to_string())],
        )
    })
}

// Strings render bare (no JSON quoting); everything else uses its JSON form.
fn render_argument(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn placeholder_names(template: &str) -> impl Iterator<Item = &str> {
    template.split('{').skip(1).filter_map(|rest| {
        let end = rest.find('}')?;
        let name = &rest[..end];
        (!name.is_empty()).then_some(name)
    })
}
