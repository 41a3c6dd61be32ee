//! Canonical operation boundary macros

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use opskit_core::log_op_start;
/// log_op_start!("load_settings");
/// log_op_start!("load_settings", section = "Database");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = opskit_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = opskit_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use opskit_core::log_op_end;
/// log_op_end!("load_settings", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = opskit_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = opskit_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation failure with its application error
///
/// # Example
///
/// ```
/// # use opskit_core::{log_op_error, ApplicationError};
/// let err = ApplicationError::technical("Storage unavailable");
/// log_op_error!("load_settings", err, duration_ms = 12);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let app_err: &$crate::ApplicationError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = opskit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.category = app_err.code(),
            err.title = app_err.title(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let app_err: &$crate::ApplicationError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = opskit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.category = app_err.code(),
            err.title = app_err.title(),
            $($field)*
        );
    }};
}
