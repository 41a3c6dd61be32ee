//! Unique string identifier generation
//!
//! Two flavors are provided:
//!
//! - [`generate_unique_id`]: a 22-character URL-safe base64 rendering of 16
//!   random bytes, for identifiers that only need collision resistance.
//! - [`generate_date_time_id`]: a 17-character `yyyyMMddHHmmssSSS` UTC
//!   timestamp, for identifiers that must sort chronologically. A process-wide
//!   monotonic millisecond counter keeps concurrent calls unique.

use std::sync::Mutex;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};

/// Length of a datetime identifier (millisecond-precision timestamp digits)
pub const DATE_TIME_ID_LEN: usize = 17;

/// Length of a random identifier (base64 of 16 bytes, unpadded)
pub const UNIQUE_ID_LEN: usize = 22;

// Last millisecond value handed out; bumped past "now" on collision so two
// calls in the same millisecond still produce distinct identifiers.
static LAST_MILLIS: Mutex<i64> = Mutex::new(0);

/// Generate a random 22-character string identifier
///
/// # Example
///
/// ```
/// let id = opskit_core_types::generate_unique_id();
/// assert_eq!(id.len(), 22);
/// ```
pub fn generate_unique_id() -> String {
    URL_SAFE_NO_PAD.encode(uuid::Uuid::new_v4().as_bytes())
}

/// Generate a chronologically sortable 17-character identifier
///
/// The identifier is the UTC wall clock formatted as `yyyyMMddHHmmssSSS`.
/// Calls never observe the same millisecond twice within a process, so the
/// result is unique even under concurrent generation.
pub fn generate_date_time_id() -> String {
    let millis = next_millis();
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|stamp| stamp.format("%Y%m%d%H%M%S%3f").to_string())
        .unwrap_or_default()
}

fn next_millis() -> i64 {
    let mut last = LAST_MILLIS.lock().unwrap_or_else(|e| e.into_inner());
    let now = Utc::now().timestamp_millis();
    let millis = if now > *last { now } else { *last + 1 };
    *last = millis;
    millis
}
