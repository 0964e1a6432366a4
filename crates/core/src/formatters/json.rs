//! JSON output format.
//!
//! The structured format: a line identifying the checked source, followed
//! by the selector → presence map pretty-printed as a JSON object with a
//! fixed four-space indent. Keys appear in sorted selector order.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::engine::CheckReport;
use crate::formatters::Formatter;
use crate::{ExamenError, Result};

/// Renders a check report as a labeled, pretty-printed JSON object.
///
/// # Example
///
/// ```rust
/// use examen_core::{check_source, render_json};
///
/// let report = check_source("index.html", r#"<div id="main"></div>"#, &["#main".to_string()]).unwrap();
/// let out = render_json(&report).unwrap();
///
/// assert!(out.starts_with("Results from: index.html\n"));
/// assert!(out.contains(r##""#main": true"##));
/// ```
pub fn render_json(report: &CheckReport) -> Result<String> {
    let mut buf = Vec::new();
    let pretty = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, pretty);

    report.results.serialize(&mut ser)?;

    let body = String::from_utf8(buf).map_err(|_| ExamenError::InvalidEncoding)?;

    Ok(format!("Results from: {}\n{}", report.source, body))
}

/// JSON formatter for check reports.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn render(&self, report: &CheckReport) -> Result<String> {
        render_json(report)
    }
}
