//! Canonical schema constants for structured logging
//!
//! These constants keep field keys and event names consistent across all
//! logging and error reporting call sites.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Application error fields
pub const FIELD_ERR_CATEGORY: &str = "err.category";
pub const FIELD_ERR_TITLE: &str = "err.title";
pub const FIELD_ERR_MESSAGE: &str = "err.message";
pub const FIELD_ERR_TECHNICAL: &str = "err.technical";
pub const FIELD_ERR_DEPTH: &str = "err.depth";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_APP_ERROR: &str = "application_error";
