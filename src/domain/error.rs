//! Error types for object rendering.
//!
//! This module defines the centralized error type [`IslandoraError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for rendering operations.
///
/// Rendering fails on [`IslandoraError::MissingField`] and, should a layout
/// template error, [`IslandoraError::Template`]. The remaining variants come
/// from loading input records and class vocabularies around a render call.
///
/// # Examples
///
/// ```
/// use islandora_objects::IslandoraError;
///
/// let err = IslandoraError::MissingField { index: 2, field: "thumb" };
/// assert_eq!(err.to_string(), "record 2 missing field thumb");
/// ```
#[derive(Debug, Error)]
pub enum IslandoraError {
    /// A record lacks a field required by the active display mode.
    ///
    /// `index` is the zero-based position of the record in the input sequence.
    #[error("record {index} missing field {field}")]
    MissingField { index: usize, field: &'static str },

    /// A display mode name did not match `grid` or `list`.
    #[error("unknown display mode: {0}")]
    UnknownMode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input records could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A class vocabulary file could not be read or parsed.
    #[error("Classes error: {0}")]
    Classes(String),

    /// A layout template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// A specialized `Result` type for rendering operations.
pub type Result<T> = std::result::Result<T, IslandoraError>;
