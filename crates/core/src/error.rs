//! Error types for Examen operations.
//!
//! This module defines the main error type [`ExamenError`] which represents
//! all possible errors that can occur while loading checks, acquiring HTML,
//! and evaluating selectors.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use examen_core::{ExamenError, Result};
//!
//! fn require_checks(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(ExamenError::ChecksFileNotFound(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for presence-check operations.
///
/// This enum represents all possible errors that can occur while loading
/// the checks file, fetching HTML, resolving an output format, and
/// evaluating selectors.
///
/// # Example
///
/// ```rust
/// use examen_core::{ExamenError, check};
///
/// match check("<html></html>", &["#@!".to_string()]) {
///     Ok(result) => println!("{} selectors checked", result.len()),
///     Err(ExamenError::InvalidSelector { selector, .. }) => {
///         println!("bad selector in checks file: {}", selector);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExamenError {
    /// The checks file does not exist.
    ///
    /// Returned before any HTML is acquired; the selector list is loaded
    /// first and the whole run is aborted if it is missing.
    #[error("Checks file not found: {0}")]
    ChecksFileNotFound(PathBuf),

    /// The checks file exists but is not a JSON array of strings.
    #[error("Checks file {path} is not a JSON array of selectors: {reason}")]
    ChecksFileInvalid { path: PathBuf, reason: String },

    /// HTML input file not found.
    ///
    /// Returned when the path given for the HTML document does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    /// Only available when the `fetch` feature is enabled.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Unknown output format name.
    ///
    /// Carries the list of registered format names so callers can print
    /// a diagnostic listing the accepted values.
    #[error("Invalid output format {requested:?}. Accepted values are: {available}")]
    UnknownFormat { requested: String, available: String },

    /// Invalid character encoding.
    ///
    /// Returned when the input bytes cannot be decoded as UTF-8 text.
    /// This is the only way "parsing" can fail: once text exists, the
    /// lenient HTML parser always produces a document.
    #[error("Invalid character encoding")]
    InvalidEncoding,

    /// A selector in the checks file is not valid CSS selector syntax.
    ///
    /// Surfaced as an error rather than coerced to "not found" so that
    /// configuration mistakes are visible.
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// JSON serialization errors from rendering a report.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors from reading files or stdin.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ExamenError.
///
/// This is a convenience alias for `std::result::Result<T, ExamenError>`.
pub type Result<T> = std::result::Result<T, ExamenError>;
