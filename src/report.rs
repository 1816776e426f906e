// src/report.rs
// =============================================================================
// Turns a CheckReport into the JSON printed on stdout.
//
// serde_json's to_string_pretty indents with two spaces; the report uses
// four, so we drive the serializer with our own PrettyFormatter.
// =============================================================================

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::checker::CheckReport;

const INDENT: &[u8] = b"    ";

/// Renders the report as a pretty-printed JSON object
pub fn render(report: &CheckReport) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
