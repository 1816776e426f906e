// src/checker/mod.rs
// =============================================================================
// This module contains the grading logic itself.
//
// Submodules:
// - checks: Loads the list of selectors from a JSON file
// - html: Parses a page and checks each selector against it
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::check()` instead of `checker::html::check()`.
// =============================================================================

mod checks;
mod html;

pub use checks::{load_checks, parse_checks};
pub use html::{check, CheckReport, Checker};
