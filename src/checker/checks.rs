// src/checker/checks.rs
// =============================================================================
// Loads the list of selectors to check from a JSON file.
//
// The file is a plain JSON array of strings:
//   ["h1", "a[href]", "form#survey"]
//
// The list comes back sorted so the report always lists selectors in the same
// order regardless of how the file was written.
// =============================================================================

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{GradeError, Result};

/// Reads and decodes the checks file at `path`.
///
/// Fails with NotFound if the file is missing, and Parse if it is not a JSON
/// array of strings.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| GradeError::from_io(path, e))?;

    let checks = parse_checks(&text).map_err(|source| GradeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = checks.len(), "loaded checks");
    Ok(checks)
}

/// Decodes a JSON array of selector strings and sorts it
pub fn parse_checks(text: &str) -> serde_json::Result<Vec<String>> {
    let mut checks: Vec<String> = serde_json::from_str(text)?;
    checks.sort();
    Ok(checks)
}
