//! Error types for Claritas operations.
//!
//! This module defines the main error type [`ClaritasError`] which represents
//! all possible errors that can occur while loading input and rendering
//! reports. The analysis pipeline itself is total over string input and
//! never produces an error.
//!
//! # Example
//!
//! ```rust
//! use claritas_core::{ClaritasError, Result};
//!
//! fn load_article(path: &str) -> Result<String> {
//!     claritas_core::read_file(path)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for content quality operations.
///
/// This enum represents all possible errors that can occur during file I/O
/// and report serialization. Computing [`ContentQuality`](crate::ContentQuality)
/// from a string cannot fail.
#[derive(Error, Debug)]
pub enum ClaritasError {
    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for file and stdin operations.
    #[error("I/O operation failed: {0}")]
    IoError(#[from] std::io::Error),

    /// Report serialization errors.
    ///
    /// Returned when a quality report cannot be rendered as JSON.
    #[error("Failed to serialize report: {0}")]
    SerializationError(String),
}

/// Result type alias for ClaritasError.
///
/// This is a convenience alias for `std::result::Result<T, ClaritasError>`.
pub type Result<T> = std::result::Result<T, ClaritasError>;
