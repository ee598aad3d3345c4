//! Error types for signal registry operations.

use thiserror::Error;

/// Signal registry error
#[derive(Debug, Error)]
pub enum SignalError {
    /// No signal declared under the path
    #[error("signal not found: {path}")]
    NotFound { path: String },

    /// Signal exists but was declared with a different type
    #[error("signal '{path}' is declared as {declared}, requested as {requested}")]
    TypeMismatch {
        path: String,
        declared: &'static str,
        requested: &'static str,
    },

    /// Write attempted on a signal without a setter
    #[error("signal '{path}' has no setter")]
    NoSetter { path: String },

    /// Read attempted on a signal without a getter
    #[error("signal '{path}' has no getter")]
    NoGetter { path: String },
}

/// Result type alias for signal registry operations
pub type Result<T> = std::result::Result<T, SignalError>;
