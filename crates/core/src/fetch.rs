//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving raw HTML from the
//! supported input sources: HTTP/HTTPS URLs, local files, and standard
//! input. All acquisition happens strictly before the check engine runs;
//! the engine itself never blocks on I/O.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::{ExamenError, Result};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
/// Timeout policy belongs entirely here; the check engine has no timeout
/// semantics of its own.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

#[cfg(feature = "fetch")]
impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Examen/1.0; +https://github.com/stormlightlabs/examen)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    use reqwest::Client;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| ExamenError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(ExamenError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ExamenError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ExamenError::Timeout { timeout: config.timeout }
            } else {
                ExamenError::HttpError(e)
            }
        })?;

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        return Err(ExamenError::FileNotFound(path_buf));
    }

    fs::read_to_string(&path_buf).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            ExamenError::InvalidEncoding
        } else {
            ExamenError::from(e)
        }
    })
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::Read;

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            ExamenError::InvalidEncoding
        } else {
            ExamenError::from(e)
        }
    })?;

    Ok(buffer)
}
