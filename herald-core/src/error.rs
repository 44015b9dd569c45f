//! Error types for Herald.
//!
//! This module provides the registry error taxonomy using `thiserror`:
//!
//! - [`InvokeError`] - Outcomes of invoking a key that cannot produce a value
//! - [`RegisterError`] - Strict registration rejections
//!
//! An unknown key is an expected, non-exceptional outcome: it is reported
//! as [`InvokeError::NotFound`] in the call's result and never escalated
//! past the registry boundary. A handler's own failure is carried unchanged
//! as the `source` of [`InvokeError::Handler`].

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by invoking a key on a keyed registry.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// No handler is registered under the requested key.
    #[error("no handler registered for key: {0}")]
    NotFound(String),

    /// The handler ran and failed; its error is preserved unchanged.
    #[error("handler failed for key: {key}")]
    Handler {
        /// The key the failing handler was registered under.
        key: String,
        /// The handler's own error, propagated as-is.
        #[source]
        source: BoxError,
    },
}

impl InvokeError {
    /// True for the unknown-key outcome, suitable for an
    /// "unsupported operation" message to the user.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors surfaced by strict registration.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// A handler is already registered under the key; the prior mapping
    /// is left unchanged.
    #[error("handler already registered for key: {0}")]
    AlreadyExists(String),
}
