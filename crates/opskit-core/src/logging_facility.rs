//! Structured logging facility
//!
//! Provides a single initialization point (`init(profile)`), operation
//! boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`), a
//! helper that logs an [`ApplicationError`](crate::ApplicationError) together
//! with its inner-error chain, and a test capture mode for deterministic
//! assertions.
//!
//! All emitted events use the canonical field keys and event names from
//! `opskit_core_types::schema`.

pub mod init;
pub mod macros;
pub mod test_capture;

use opskit_core_types::schema;

use crate::errors::ApplicationError;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedLog, LogCapture};

/// Log an application error and its whole inner chain
///
/// One `error` event is emitted per error in the chain, outermost first, with
/// the chain position in the depth field. Detail templates are rendered with
/// their arguments before logging.
pub fn log_application_error(error: &ApplicationError) {
    let mut current = Some(error);
    let mut depth: u64 = 0;
    while let Some(e) = current {
        // Field names match the constants in opskit_core_types::schema.
        tracing::error!(
            component = module_path!(),
            event = schema::EVENT_APP_ERROR,
            err.category = e.code(),
            err.title = e.title(),
            err.message = e.detail_message().as_deref().unwrap_or(""),
            err.technical = e.technical_message().as_deref().unwrap_or(""),
            err.depth = depth,
        );
        current = e.inner();
        depth += 1;
    }
}
