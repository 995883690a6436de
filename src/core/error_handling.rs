//! Generic error handling utilities
//!
//! Error reporting that distinguishes user-actionable failures from system
//! failures while keeping one logging entry point for both.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (bad attribute values, malformed settings) carry a
/// message the user can act on directly and should be shown as-is. System
/// errors (lookup failures, lifecycle violations) get generic context at
/// error level, with full detail kept at debug level.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; when it returns `false`, `user_message()` must return
/// `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific, user-actionable message
    /// that should be displayed directly to the user
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log an error with detail appropriate to its specificity
///
/// User-actionable errors log their own message; system errors log the
/// operation context instead. Full detail always goes to debug level.
///
/// # Examples
/// ```rust,no_run
/// # use vertask::core::error_handling::log_error_with_context;
/// # use vertask::task::api::TaskError;
/// let err = TaskError::Generic {
///     message: "Invalid value 'abc' for attribute 'major'".to_string(),
/// };
/// log_error_with_context(&err, "Task configuration");
/// // Logs: "FATAL: Invalid value 'abc' for attribute 'major'"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        match error.user_message() {
            Some(user_msg) => log::error!("FATAL: {}", user_msg),
            None => log::error!("FATAL: {}", operation_context),
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    // Detail only at debug level
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
