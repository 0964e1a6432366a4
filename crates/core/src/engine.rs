//! The presence-check engine.
//!
//! This module is the core of examen: given one raw HTML blob and an
//! ordered list of selector expressions, parse the HTML once and produce a
//! deterministic selector → presence map.
//!
//! The engine is stateless and re-entrant. It performs no I/O; acquiring
//! HTML from files or URLs happens strictly before [`check`] is invoked.
//!
//! # Example
//!
//! ```rust
//! use examen_core::check;
//!
//! let html = r#"<html><body><div id="main"></div></body></html>"#;
//! let selectors = vec!["div".to_string(), "#main".to_string(), "span".to_string()];
//!
//! let result = check(html, &selectors).unwrap();
//! assert_eq!(result["#main"], true);
//! assert_eq!(result["span"], false);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parse::Document;
use crate::{Result, selector};

/// The per-run mapping of selector expression to presence flag.
///
/// Keyed by the selector string, so duplicate entries in the checks file
/// collapse to one key (last write wins) and iteration order is the
/// lexicographic ascending order of the selector strings.
pub type CheckResult = BTreeMap<String, bool>;

/// A check result labeled with the source it was produced from.
///
/// `source` is the file path, `-` for stdin, or the URL that supplied the
/// HTML. Formatters render one report per source.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    /// Identifier of the checked input.
    pub source: String,
    /// Selector → presence map, in sorted selector order.
    pub results: CheckResult,
}

/// Checks one HTML document for the presence of each selector.
///
/// The HTML is parsed exactly once and the resulting [`Document`] is shared
/// read-only across all selector evaluations, so every selector is checked
/// against the identical snapshot. Selectors are evaluated in sorted order;
/// the map key is the selector string itself.
///
/// An empty selector list yields an empty map.
///
/// # Errors
///
/// Returns [`crate::ExamenError::InvalidSelector`] if any selector fails to
/// compile. The whole check is aborted; no partial result is returned.
pub fn check(html: &str, selectors: &[String]) -> Result<CheckResult> {
    let doc = Document::parse(html)?;
    check_document(&doc, selectors)
}

/// Checks an already-parsed document for the presence of each selector.
///
/// Useful when the caller needs the [`Document`] for other queries (for
/// example the page title) and wants to avoid a second parse.
pub fn check_document(doc: &Document, selectors: &[String]) -> Result<CheckResult> {
    let mut results = CheckResult::new();

    for sel in selectors {
        let present = selector::exists(doc, sel)?;
        results.insert(sel.clone(), present);
    }

    Ok(results)
}

/// Checks one HTML document and labels the result with its source.
pub fn check_source(source: &str, html: &str, selectors: &[String]) -> Result<CheckReport> {
    let results = check(html, selectors)?;
    Ok(CheckReport { source: source.to_string(), results })
}
