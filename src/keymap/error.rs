//! Key binding errors.

use crate::core::ActionError;
use thiserror::Error;

/// Errors for a single key binding
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BindingError {
    /// The key name is empty or only whitespace
    #[error("Key name must not be empty (bound to '{action}')")]
    EmptyKey { action: String },

    /// The bound action text does not parse
    #[error("Key '{key}': {source}")]
    InvalidAction { key: String, source: ActionError },
}
