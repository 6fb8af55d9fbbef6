//! Canonical logging macros
//!
//! Every config operation logs one `start` event and exactly one of `end`
//! or `end_error`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use uicfg_core::log_op_start;
/// log_op_start!("create_ui_config");
/// log_op_start!("create_ui_config", component_id = "main-button");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use uicfg_core::log_op_end;
/// log_op_end!("create_ui_config", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// # Example
///
/// ```
/// # use uicfg_core::{log_op_error, errors::UiConfigError};
/// let err = UiConfigError::RowNotFound { id: 1 };
/// log_op_error!("update_ui_config", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($field)*
        );
    }};
}
