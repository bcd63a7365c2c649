//! Domain error types for emojipick
//!
//! Provides structured error types for different domains:
//! - `PickerError` for widget commands
//! - `CatalogError` for loading and validating catalogs
//! - `AppError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for emojipick
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors raised by picker state transitions.
///
/// Both variants are recoverable: the widget stays in its previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("Category '{0}' not found in catalog")]
    InvalidCategory(String),

    #[error("Invalid host invocation: {0}")]
    InvalidHostInvocation(&'static str),
}

/// Errors related to catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no categories")]
    Empty,

    #[error("Category at position {0} has an empty id")]
    EmptyCategoryId(usize),

    #[error("Duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;

/// Result type alias for CatalogError
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

// Conversion from anyhow::Error for the binary edge
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}
