//! CSS selector evaluation.
//!
//! This module answers the one question the check engine asks: does at
//! least one node in a parsed document match a given selector expression?
//!
//! Selectors are compiled with [`scraper::Selector`], which accepts the
//! standard CSS dialect: tag names, `#id`, `.class`, attribute presence and
//! attribute value predicates, descendant combinators, and compound
//! selectors. A selector that fails to compile is a configuration mistake
//! and surfaces as [`crate::ExamenError::InvalidSelector`], never as a
//! silent "not found".

use scraper::Selector;

use crate::parse::Document;
use crate::{ExamenError, Result};

/// Compiles a selector expression.
///
/// # Errors
///
/// Returns [`ExamenError::InvalidSelector`] when the expression is not
/// valid CSS selector syntax, carrying the offending expression and the
/// parser's reason.
pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ExamenError::InvalidSelector { selector: selector.to_string(), reason: e.to_string() })
}

/// Returns true iff at least one node in the document matches the selector.
///
/// The document is traversed read-only; evaluation has no side effects and
/// never mutates or re-parses the tree.
///
/// # Example
///
/// ```rust
/// use examen_core::parse::Document;
/// use examen_core::selector::exists;
///
/// let doc = Document::parse(r#"<div id="main"></div>"#).unwrap();
/// assert!(exists(&doc, "#main").unwrap());
/// assert!(!exists(&doc, "span").unwrap());
/// ```
pub fn exists(doc: &Document, selector: &str) -> Result<bool> {
    let sel = compile(selector)?;
    Ok(doc.html().select(&sel).next().is_some())
}
