mod echo;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use examen_core::{
    CheckReport, Document, FetchConfig, FormatRegistry, check_document, fetch_file, fetch_stdin, fetch_url, load_checks,
};
use owo_colors::OwoColorize;

use crate::echo::{format_size, print_banner, print_error, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check HTML documents for the presence of elements named by CSS selectors
#[derive(Parser, Debug)]
#[command(name = "examen")]
#[command(author = "Examen Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Check HTML documents for required elements", long_about = None)]
struct Args {
    /// Path to the JSON checks file
    #[arg(short, long, default_value = "checks.json", value_name = "FILE")]
    checks: PathBuf,

    /// Path to a local HTML file, or "-" for stdin
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// URL of an HTML page to fetch
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    output: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable progress logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// One resolvable HTML input.
enum Source {
    File(String),
    Url(String),
}

impl Source {
    fn label(&self) -> &str {
        match self {
            Source::File(path) => path,
            Source::Url(url) => url,
        }
    }
}

/// Resolves a source into raw HTML. All I/O happens here, before checking.
async fn acquire(source: &Source, config: &FetchConfig) -> examen_core::Result<String> {
    match source {
        Source::File(path) if path == "-" => fetch_stdin(),
        Source::File(path) => fetch_file(path),
        Source::Url(url) => fetch_url(url, config).await,
    }
}

/// Parses the acquired HTML once and evaluates every selector against it.
fn process(source: &Source, html: &str, checks: &[String], verbose: bool) -> examen_core::Result<CheckReport> {
    let doc = Document::parse(html)?;

    if verbose && let Some(title) = doc.title() {
        eprintln!("  {} {}", "Title:".dimmed(), title.trim().bright_white());
    }

    let results = check_document(&doc, checks)?;

    Ok(CheckReport { source: source.label().to_string(), results })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    if args.verbose {
        print_step(1, 3, &format!("Loading checks from {}", args.checks.display()));
    }

    let checks = load_checks(&args.checks)?;

    if args.verbose {
        if checks.is_empty() {
            print_warning("Checks file contains no selectors");
        } else {
            print_info(&format!("{} selectors loaded", checks.len()));
        }
    }

    let registry = FormatRegistry::with_defaults();
    let formatter = registry.get(&args.output)?;

    let mut sources = Vec::new();
    if let Some(file) = args.file.clone() {
        sources.push(Source::File(file));
    }
    if let Some(url) = args.url.clone() {
        sources.push(Source::Url(url));
    }

    if sources.is_empty() {
        anyhow::bail!("No valid input given.");
    }

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args
            .user_agent
            .clone()
            .unwrap_or_else(|| "Mozilla/5.0 (compatible; Examen/1.0)".to_string()),
    };

    let mut checked = 0usize;

    for source in &sources {
        if args.verbose {
            print_step(2, 3, &format!("Acquiring {}", source.label()));
        }

        let html = match acquire(source, &fetch_config).await {
            Ok(html) => html,
            Err(e) => {
                print_error(&format!("{}: {}", source.label(), e));
                continue;
            }
        };

        if args.verbose {
            eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
            print_step(3, 3, &format!("Checking {}", source.label()));
        }

        let report = match process(source, &html, &checks, args.verbose) {
            Ok(report) => report,
            Err(e) => {
                print_error(&format!("{}: {}", source.label(), e));
                continue;
            }
        };

        let rendered = formatter.render(&report).context("Failed to render report")?;
        println!("{}", rendered);

        if args.verbose {
            print_success(&format!("{} checked", source.label()));
        }

        checked += 1;
    }

    if checked == 0 {
        anyhow::bail!("No input could be checked.");
    }

    Ok(())
}
