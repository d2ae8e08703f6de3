//! Core error types for Floe.

use thiserror::Error;

/// Result type alias using `FloeError`.
pub type FloeResult<T> = std::result::Result<T, FloeError>;

/// Generic boxed error for external error sources.
pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for Floe operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FloeError {
    /// Type mismatch or invalid type operation.
    #[error("TypeError: {0}")]
    TypeError(String),

    /// Invalid value provided.
    #[error("ValueError: {0}")]
    ValueError(String),

    /// Planning failed; the query cannot be optimized.
    #[error("PlanningError: {0}")]
    PlanningError(String),

    /// Predicate or projection references a column the scan does not produce.
    #[error("ColumnNotFound: {0}")]
    ColumnNotFound(String),

    /// Table metadata lookup failed.
    #[error("TableNotFound: {0}")]
    TableNotFound(String),

    /// Transaction-scoped metadata lookup failed.
    #[error("TransactionNotFound: {0}")]
    TransactionNotFound(String),

    /// Table metadata is present but malformed or inconsistent.
    #[error("MetadataError: {0}")]
    MetadataError(String),

    /// Feature not yet implemented.
    #[error("NotImplemented: {0}")]
    NotImplemented(String),

    /// Internal error (bug in Floe).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// External error from third-party libraries.
    #[error("ExternalError: {0}")]
    ExternalError(GenericError),
}

impl FloeError {
    /// Create a new `TypeError`.
    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        Self::TypeError(msg.into())
    }

    /// Create a new `ValueError`.
    pub fn value_error<S: Into<String>>(msg: S) -> Self {
        Self::ValueError(msg.into())
    }

    /// Create a new `PlanningError`.
    pub fn planning<S: Into<String>>(msg: S) -> Self {
        Self::PlanningError(msg.into())
    }

    /// Create a new `ColumnNotFound` error.
    pub fn column_not_found<S: Into<String>>(msg: S) -> Self {
        Self::ColumnNotFound(msg.into())
    }

    /// Create a new `TableNotFound` error.
    pub fn table_not_found<S: Into<String>>(msg: S) -> Self {
        Self::TableNotFound(msg.into())
    }

    /// Create a new `TransactionNotFound` error.
    pub fn transaction_not_found<S: Into<String>>(msg: S) -> Self {
        Self::TransactionNotFound(msg.into())
    }

    /// Create a new `MetadataError`.
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        Self::MetadataError(msg.into())
    }

    /// Create a new `NotImplemented` error.
    pub fn not_implemented<S: Into<String>>(msg: S) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Ensure a condition holds, returning the named error variant if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::FloeError::PlanningError($msg.to_string()));
        }
    };
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::FloeError::$variant(format!($($msg)*)));
        }
    };
}

/// Return early with a `PlanningError`.
#[macro_export]
macro_rules! plan_err {
    ($($arg:tt)*) => {
        return Err($crate::FloeError::PlanningError(format!($($arg)*)))
    };
}

/// Return early with a `TypeError`.
#[macro_export]
macro_rules! type_err {
    ($($arg:tt)*) => {
        return Err($crate::FloeError::TypeError(format!($($arg)*)))
    };
}
