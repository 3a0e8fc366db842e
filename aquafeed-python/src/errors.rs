//! Python Error Handling
//!
//! Rust errors are collected in [`BindingError`] and converted to Python
//! exceptions at the boundary:
//!
//! ```text
//! FeedingError::NonPositive / NotFinite  → InvalidRequestError
//! FeedingError::TooLarge                 → InvalidRequestError
//! malformed request JSON                 → InvalidRequestError
//! FeedingError::InvalidProfile           → ProfileError
//! SchemaError (species documents)        → ProfileError
//! ```
//!
//! All three exception classes derive from `AquafeedError`, so Python code
//! can catch everything from this module with one `except` clause.

use aquafeed_core::FeedingError;
use aquafeed_schemas::SchemaError;
use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::PyErr;

create_exception!(aquafeed, AquafeedError, PyException, "Base class for aquafeed errors.");
create_exception!(
    aquafeed,
    InvalidRequestError,
    AquafeedError,
    "A feeding request was rejected before calculation."
);
create_exception!(
    aquafeed,
    ProfileError,
    AquafeedError,
    "A species profile or species-table document is invalid."
);

/// Errors raised by the bindings
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// Request failed validation
    #[error("{0}")]
    Request(FeedingError),

    /// Request JSON could not be parsed
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Species profile or document is invalid
    #[error("{0}")]
    Profile(String),

    /// Result could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<FeedingError> for BindingError {
    fn from(err: FeedingError) -> Self {
        match err {
            FeedingError::InvalidProfile { .. } => BindingError::Profile(err.to_string()),
            _ => BindingError::Request(err),
        }
    }
}

impl From<SchemaError> for BindingError {
    fn from(err: SchemaError) -> Self {
        BindingError::Profile(err.to_string())
    }
}

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> PyErr {
        match err {
            BindingError::Request(_) | BindingError::MalformedRequest(_) => {
                InvalidRequestError::new_err(err.to_string())
            }
            BindingError::Profile(_) => ProfileError::new_err(err.to_string()),
            BindingError::Serialization(_) => AquafeedError::new_err(err.to_string()),
        }
    }
}

/// Result type for binding helpers
pub type BindingResult<T> = Result<T, BindingError>;
