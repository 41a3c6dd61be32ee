//! Structured application errors
//!
//! [`ApplicationError`] is the canonical error carried across facility
//! boundaries: a category, a short title, and message templates with named
//! placeholders rendered from serializable arguments. Errors nest through an
//! inner-error chain, and the whole value round-trips through serde so it can
//! cross process boundaries as a DTO.
//!
//! The original distinction between "value or error" and "conditional value"
//! wrappers is covered by `Result<T>`/`Option<T>` here.

use serde::{Deserialize, Serialize};

use crate::format::format_with_named_placeholders;

/// Result type alias using ApplicationError
pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Coarse error classification with stable codes
///
/// `Functional` errors are business outcomes a user can act on; `Technical`
/// errors are infrastructure failures; `Unknown` is the fallback for errors
/// that were never classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ErrorCategory {
    #[default]
    Unknown,
    Functional,
    Technical,
}

impl ErrorCategory {
    /// Get the stable code for this category
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCategory::Unknown => "ERR_UNKNOWN",
            ErrorCategory::Functional => "ERR_FUNCTIONAL",
            ErrorCategory::Technical => "ERR_TECHNICAL",
        }
    }
}

/// Canonical structured application error
///
/// Details are stored as a template plus arguments rather than a rendered
/// string, so the same error can be re-rendered, localized, or logged with
/// its arguments as structured fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationError {
    category: ErrorCategory,
    title: String,
    detail: Option<String>,
    arguments: Vec<serde_json::Value>,
    technical_detail: Option<String>,
    technical_arguments: Vec<serde_json::Value>,
    inner: Option<Box<ApplicationError>>,
}

impl ApplicationError {
    /// Create a new error with the specified category and title
    pub fn new(category: ErrorCategory, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            detail: None,
            arguments: Vec::new(),
            technical_detail: None,
            technical_arguments: Vec::new(),
            inner: None,
        }
    }

    /// Shorthand for a functional (business) error
    pub fn functional(title: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Functional, title)
    }

    /// Shorthand for a technical (infrastructure) error
    pub fn technical(title: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Technical, title)
    }

    /// Add a user-facing detail template with its arguments
    ///
    /// The template uses `{Name}` placeholders, filled from `arguments` in
    /// order of first appearance.
    pub fn with_detail(
        mut self,
        template: impl Into<String>,
        arguments: impl IntoIterator<Item = serde_json::Value>,
    ) -> Self {
        self.detail = Some(template.into());
        self.arguments = arguments.into_iter().collect();
        self
    }

    /// Add a technical detail template with its arguments
    pub fn with_technical_detail(
        mut self,
        template: impl Into<String>,
        arguments: impl IntoIterator<Item = serde_json::Value>,
    ) -> Self {
        self.technical_detail = Some(template.into());
        self.technical_arguments = arguments.into_iter().collect();
        self
    }

    /// Chain an inner error
    pub fn with_inner(mut self, inner: ApplicationError) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Get the stable category code
    pub fn code(&self) -> &'static str {
        self.category.code()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the raw detail template, if any
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn arguments(&self) -> &[serde_json::Value] {
        &self.arguments
    }

    /// Get the raw technical detail template, if any
    pub fn technical_detail(&self) -> Option<&str> {
        self.technical_detail.as_deref()
    }

    pub fn technical_arguments(&self) -> &[serde_json::Value] {
        &self.technical_arguments
    }

    pub fn inner(&self) -> Option<&ApplicationError> {
        self.inner.as_deref()
    }

    /// Render the detail template with its arguments
    pub fn detail_message(&self) -> Option<String> {
        self.detail
            .as_deref()
            .map(|t| format_with_named_placeholders(t, &self.arguments))
    }

    /// Render the technical detail template with its arguments
    pub fn technical_message(&self) -> Option<String> {
        self.technical_detail
            .as_deref()
            .map(|t| format_with_named_placeholders(t, &self.technical_arguments))
    }

    /// Concatenate the messages of this error and its whole inner chain
    ///
    /// Messages are joined with a single space, outermost first. An error
    /// without detail contributes its title.
    pub fn full_message(&self) -> String {
        let mut parts = Vec::new();
        let mut current = Some(self);
        while let Some(err) = current {
            parts.push(err.detail_message().unwrap_or_else(|| err.title.clone()));
            current = err.inner();
        }
        parts.join(" ")
    }
}

impl std::fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.title)?;
        if let Some(detail) = self.detail_message() {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApplicationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
