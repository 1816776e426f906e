// src/lib.rs
// =============================================================================
// html-grader as a library.
//
// The binary (src/main.rs) is a thin wrapper around `grade()`. Anything that
// already has the HTML in hand can skip the I/O and call `checker::check()`
// directly.
//
// Modules:
// - checker: loads selectors and checks them against a page
// - source:  reads a local file or fetches a URL
// - report:  renders the result as 4-space-indented JSON
// - cli:     command-line flags
// - logging: tracing setup for the binary
// - error:   the GradeError enum
// =============================================================================

pub mod checker;
pub mod cli;
pub mod error;
pub mod logging;
pub mod report;
pub mod source;

use std::path::Path;
use std::time::Duration;
use tracing::info;

pub use checker::{check, CheckReport, Checker};
pub use error::{GradeError, Result};
pub use source::Source;

/// Loads the checks, gets the document and checks every selector.
///
/// Order matters:
/// 1. The checks file is loaded first, so a bad checks file fails before
///    any HTML is read or any request is sent
/// 2. A missing local HTML file fails before anything is parsed
/// 3. The page is read or fetched (the only await)
/// 4. The page is parsed once and checked
pub async fn grade(checks_path: &Path, source: &Source, timeout: Duration) -> Result<CheckReport> {
    let checks = checker::load_checks(checks_path)?;
    source.ensure_exists()?;

    let html = source.load(timeout).await?;
    let report = checker::check(&html, checks.as_slice());

    info!("{} of {} checks passed", report.passed(), report.len());
    Ok(report)
}
