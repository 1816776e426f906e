// src/source/mod.rs
// =============================================================================
// This module works out where the HTML comes from and gets it.
//
// Two modes, only one used per run:
// - File: read a local HTML file (the default, index.html)
// - Url:  download a page over HTTP(S) (wins when --url is given)
//
// Submodules:
// - fetch: the HTTP side
// =============================================================================

mod fetch;

pub use fetch::{build_client, fetch_url, DEFAULT_TIMEOUT};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::error::{GradeError, Result};

/// Where the HTML document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(Url),
}

impl Source {
    /// Picks the source for a run. A URL takes precedence over the file.
    ///
    /// The URL string is validated here, before anything is read or fetched.
    pub fn resolve(file: PathBuf, url: Option<&str>) -> Result<Self> {
        match url {
            Some(url) => Ok(Source::Url(parse_url(url)?)),
            None => Ok(Source::File(file)),
        }
    }

    /// Fails early with NotFound if this is a file source that doesn't exist
    pub fn ensure_exists(&self) -> Result<()> {
        match self {
            Source::File(path) if !path.exists() => Err(GradeError::NotFound { path: path.clone() }),
            _ => Ok(()),
        }
    }

    /// Reads or downloads the document.
    ///
    /// For a URL this is the one await point of the whole run.
    pub async fn load(&self, timeout: Duration) -> Result<String> {
        match self {
            Source::File(path) => {
                info!("Found file {}", path.display());
                read_file(path)
            }
            Source::Url(url) => {
                info!("Found URL {}", url);
                let client = build_client(timeout)?;
                fetch_url(&client, url).await
            }
        }
    }
}

/// Reads a local HTML file.
///
/// Bytes that aren't valid UTF-8 are replaced rather than rejected, the same
/// way the HTML parser treats broken markup.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| GradeError::from_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses and validates a --url value: it must be absolute http or https
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| GradeError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(GradeError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_url_wins_over_file() {
        let source = Source::resolve("index.html".into(), Some("https://example.com/")).unwrap();
        assert_eq!(source, Source::Url(Url::parse("https://example.com/").unwrap()));
    }

    #[test]
    fn test_file_without_url() {
        let source = Source::resolve("page.html".into(), None).unwrap();
        assert_eq!(source, Source::File(PathBuf::from("page.html")));
    }

    #[test]
    fn test_url_source_skips_file_existence_check() {
        let source = Source::resolve("does-not-exist.html".into(), Some("http://example.com")).unwrap();
        assert!(source.ensure_exists().is_ok());
    }

    #[test]
    fn test_missing_file_source_fails_early() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("index.html"));
        assert!(matches!(
            source.ensure_exists().unwrap_err(),
            GradeError::NotFound { .. }
        ));
    }

    #[test]
    fn test_parse_url_rejects_relative_and_other_schemes() {
        assert!(matches!(
            parse_url("not a url").unwrap_err(),
            GradeError::InvalidUrl { .. }
        ));
        assert!(matches!(
            parse_url("ftp://example.com/index.html").unwrap_err(),
            GradeError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn test_read_file_replaces_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>caf\xe9</p>").unwrap();
        let html = read_file(file.path()).unwrap();
        assert!(html.starts_with("<p>caf"));
        assert!(html.contains('\u{FFFD}'));
    }

    #[tokio::test]
    async fn test_load_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<h1>Hi</h1>").unwrap();
        let source = Source::File(file.path().to_path_buf());
        assert_eq!(source.load(DEFAULT_TIMEOUT).await.unwrap(), "<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("nope.html"));
        assert!(matches!(
            source.load(DEFAULT_TIMEOUT).await.unwrap_err(),
            GradeError::NotFound { .. }
        ));
    }
}
