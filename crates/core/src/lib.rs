pub mod checks;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod parse;
pub mod selector;

pub use checks::load_checks;
pub use engine::{CheckReport, CheckResult, check, check_document, check_source};
pub use error::{ExamenError, Result};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use fetch::{fetch_file, fetch_stdin};
pub use formatters::{FormatRegistry, Formatter, JsonFormatter, TextFormatter, render_json, render_text};
pub use parse::{Document, Element};
pub use selector::exists;
