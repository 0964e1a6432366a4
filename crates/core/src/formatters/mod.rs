//! Output formats for check reports.
//!
//! Formatters are registered in a [`FormatRegistry`] that is constructed
//! once at startup and passed by reference into the CLI layer; it is never
//! mutated after construction. Lookup is case-insensitive, and an unknown
//! name yields an error that carries the accepted values so callers can
//! print a useful diagnostic.

pub mod json;
pub mod text;

pub use json::{JsonFormatter, render_json};
pub use text::{TextFormatter, render_text};

use crate::engine::CheckReport;
use crate::{ExamenError, Result};

/// Renders a labeled check report into a presentation format.
pub trait Formatter {
    fn render(&self, report: &CheckReport) -> Result<String>;
}

/// Registry of known output formats.
///
/// Entries keep their registration order, which is also the order names
/// appear in diagnostics.
pub struct FormatRegistry {
    entries: Vec<(&'static str, Box<dyn Formatter>)>,
}

impl FormatRegistry {
    /// Builds the registry with the built-in formats: `json` and `text`.
    pub fn with_defaults() -> Self {
        Self {
            entries: vec![
                ("json", Box::new(JsonFormatter::new())),
                ("text", Box::new(TextFormatter::new())),
            ],
        }
    }

    /// Names of all registered formats, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Looks up a formatter by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ExamenError::UnknownFormat`] listing the accepted values
    /// when no registered format matches.
    pub fn get(&self, name: &str) -> Result<&dyn Formatter> {
        let wanted = name.to_lowercase();

        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == wanted)
            .map(|(_, formatter)| formatter.as_ref())
            .ok_or_else(|| ExamenError::UnknownFormat {
                requested: name.to_string(),
                available: self.names().join(", "),
            })
    }
}
