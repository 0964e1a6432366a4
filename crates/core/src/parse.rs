//! HTML parsing.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML leniently and querying the resulting tree with CSS selectors.
//!
//! Parsing is tolerant by construction: html5ever repairs unclosed tags,
//! missing doctypes, and other malformed markup, so any text input yields a
//! document with at least an implicit `<html>` root.
//!
//! # Example
//!
//! ```rust
//! use examen_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <div id="main"><p class="intro">Hello</p></div>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let intros = doc.select("p.intro").unwrap();
//! assert_eq!(intros.len(), 1);
//! ```

use scraper::Html;

use crate::{Result, selector};

/// Represents a parsed HTML document.
///
/// A Document wraps one HTML input and provides methods for querying
/// elements using CSS selectors. It is immutable once parsed and is shared
/// read-only across all selector evaluations of a check run.
///
/// # Example
///
/// ```rust
/// use examen_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Lenient parsing never fails on malformed markup; even an empty
    /// string produces a minimal document with an `<html>` root. The
    /// `Result` return keeps the adapter contract explicit for callers
    /// that treat parsing as fallible.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Gets the raw HTML representation.
    ///
    /// Returns a reference to the underlying `scraper::Html` instance.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExamenError::InvalidSelector`] if the selector is
    /// not valid CSS selector syntax.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = selector::compile(selector)?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let sel = selector::compile("title").ok()?;
        self.html.select(&sel).next().map(|el| el.text().collect::<String>())
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single matched node and provides access to its
/// attributes and text content, useful when inspecting what a selector
/// actually matched.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExamenError;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
        </head>
        <body>
            <h1>Heading</h1>
            <div id="main">
                <p class="content">Paragraph 1</p>
                <p class="content">Paragraph 2</p>
            </div>
            <a href="https://example.com">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].text(), "Paragraph 2");
    }

    #[test]
    fn test_element_attributes() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("a").unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].attr("href"), Some("https://example.com"));
        assert_eq!(elements[0].tag_name(), "a");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let result = doc.select("[[invalid");

        assert!(matches!(result, Err(ExamenError::InvalidSelector { .. })));
    }

    #[test]
    fn test_parse_empty_input_has_root() {
        let doc = Document::parse("").unwrap();
        assert_eq!(doc.select("html").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_malformed_input_recovers() {
        let doc = Document::parse("<div><p>text").unwrap();
        assert_eq!(doc.select("p").unwrap().len(), 1);
    }
}
