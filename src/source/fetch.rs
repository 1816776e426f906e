// src/source/fetch.rs
// =============================================================================
// This module downloads a page over HTTP(S).
//
// There is exactly one request per run: we send a GET, wait for the body and
// hand it back. No retries and no concurrency - if the request fails, the
// error is reported and the run stops.
//
// Rust concepts:
// - async functions: the caller awaits the whole download before moving on
// - Result: every failure becomes a GradeError::Fetch with a readable message
// =============================================================================

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::{GradeError, Result};

/// Default time to wait for a response before giving up
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Builds the HTTP client used for the fetch
//
// Parameters:
//   timeout: how long to wait for the whole request (connect + body)
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(5))  // Follow up to 5 redirects
        .user_agent(concat!("html-grader/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GradeError::Client {
            message: e.to_string(),
        })
}

// Fetches the body of `url` as text
//
// Returns: the page HTML, or GradeError::Fetch if the request failed or the
// server answered with a non-2xx status
pub async fn fetch_url(client: &Client, url: &Url) -> Result<String> {
    info!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| fetch_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GradeError::Fetch {
            url: url.to_string(),
            message: format!("HTTP {}", status.as_u16()),
        });
    }

    // text() decodes using the charset from Content-Type (UTF-8 by default)
    let body = response.text().await.map_err(|e| fetch_error(url, e))?;
    debug!(bytes = body.len(), "fetched page");
    Ok(body)
}

// Turns a reqwest error into a short, human-readable message
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Too many redirects
// - etc.
fn fetch_error(url: &Url, error: reqwest::Error) -> GradeError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    GradeError::Fetch {
        url: url.to_string(),
        message,
    }
}
