//! Loading the selector list from a checks file.
//!
//! The checks file is a JSON array of selector-expression strings:
//!
//! ```json
//! ["h1", "#main", ".nav li a", "img[src]"]
//! ```
//!
//! The list is loaded once at startup and is read-only thereafter. Order is
//! preserved as written; the engine's result map sorts it regardless.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{ExamenError, Result};

/// Loads the ordered selector list from a JSON checks file.
///
/// # Errors
///
/// Returns [`ExamenError::ChecksFileNotFound`] if the file does not exist,
/// and [`ExamenError::ChecksFileInvalid`] if it is not a JSON array of
/// strings. Both are fatal to the run and are raised before any HTML is
/// acquired.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ExamenError::ChecksFileNotFound(PathBuf::from(path)));
    }

    let raw = fs::read_to_string(path)?;

    serde_json::from_str(&raw)
        .map_err(|e| ExamenError::ChecksFileInvalid { path: PathBuf::from(path), reason: e.to_string() })
}
