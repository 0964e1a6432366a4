//! Plain-text output format.
//!
//! One `pass`/`fail` line per selector plus a summary count, for quick
//! terminal reading when the JSON structure is not needed.

use crate::Result;
use crate::engine::CheckReport;
use crate::formatters::Formatter;

/// Renders a check report as aligned pass/fail lines.
///
/// Output shape:
///
/// ```text
/// Results from: index.html
///   pass  #main
///   fail  span
/// 1 of 2 selectors present
/// ```
pub fn render_text(report: &CheckReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("Results from: {}\n", report.source));

    for (selector, present) in &report.results {
        let verdict = if *present { "pass" } else { "fail" };
        out.push_str(&format!("  {}  {}\n", verdict, selector));
    }

    let found = report.results.values().filter(|present| **present).count();
    out.push_str(&format!("{} of {} selectors present", found, report.results.len()));

    Ok(out)
}

/// Plain-text formatter for check reports.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn render(&self, report: &CheckReport) -> Result<String> {
        render_text(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CheckResult;

    fn report(entries: &[(&str, bool)]) -> CheckReport {
        let mut results = CheckResult::new();
        for (selector, present) in entries {
            results.insert(selector.to_string(), *present);
        }
        CheckReport { source: "index.html".to_string(), results }
    }

    #[test]
    fn test_render_text_lines() {
        let out = render_text(&report(&[("#main", true), ("span", false)])).unwrap();

        assert!(out.starts_with("Results from: index.html\n"));
        assert!(out.contains("pass  #main"));
        assert!(out.contains("fail  span"));
    }

    #[test]
    fn test_render_text_summary() {
        let out = render_text(&report(&[("#main", true), ("div", true), ("span", false)])).unwrap();
        assert!(out.ends_with("2 of 3 selectors present"));
    }

    #[test]
    fn test_render_text_sorted_order() {
        let out = render_text(&report(&[("span", false), ("#main", true)])).unwrap();

        let main = out.find("#main").unwrap();
        let span = out.find("span").unwrap();
        assert!(main < span);
    }

    #[test]
    fn test_render_text_empty() {
        let out = render_text(&report(&[])).unwrap();
        assert!(out.ends_with("0 of 0 selectors present"));
    }
}
