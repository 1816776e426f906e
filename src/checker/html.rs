// src/checker/html.rs
// =============================================================================
// This module answers "does this page contain X?" for a batch of selectors.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never rejects markup: unclosed tags and
//   other junk are repaired the same way a browser would repair them
//
// The document is parsed once and every selector runs against that same tree.
// =============================================================================

use scraper::error::SelectorErrorKind;
use scraper::{Html, Selector};
use selectors::parser::SelectorParseErrorKind;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::GradeError;

/// Presence of each selector in a document, keyed by the selector's text.
///
/// Serializes as a flat JSON object. Keys come out in sorted order because
/// the map is a BTreeMap; duplicate selectors collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: BTreeMap<String, bool>,
}

impl CheckReport {
    /// Whether `selector` matched, or None if it was not checked
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates (selector, present) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of selectors that matched at least one element
    pub fn passed(&self) -> usize {
        self.results.values().filter(|present| **present).count()
    }

    fn insert(&mut self, selector: &str, present: bool) {
        self.results.insert(selector.to_string(), present);
    }
}

/// A parsed HTML document that can be queried with CSS selectors
pub struct Checker {
    document: Html,
}

impl Checker {
    /// Parses markup into a DOM tree. Never fails.
    pub fn parse(html: &str) -> Self {
        Checker {
            document: Html::parse_document(html),
        }
    }

    /// Returns true if at least one element matches `selector`.
    ///
    /// Fails when the selector is not valid CSS, or when it uses a
    /// pseudo-class the engine can't evaluate (`:has()`, `:is()`, `:where()`,
    /// `:contains()`, ...).
    pub fn matches(&self, selector: &str) -> Result<bool, GradeError> {
        let parsed = Selector::parse(selector).map_err(|e| selector_error(selector, e))?;

        // Existence, not count: stop at the first hit
        Ok(self.document.select(&parsed).next().is_some())
    }

    /// Checks every selector against this document
    pub fn check<S: AsRef<str>>(&self, selectors: &[S]) -> CheckReport {
        let mut report = CheckReport::default();

        for selector in selectors {
            let selector = selector.as_ref();
            let present = match self.matches(selector) {
                Ok(present) => present,
                // One bad selector shouldn't hide the results of the others
                Err(e @ GradeError::UnsupportedSelector { .. }) => {
                    warn!("{}; reporting it as not present", e);
                    false
                }
                Err(e) => {
                    warn!("{}", e);
                    false
                }
            };
            debug!(selector, present, "checked selector");
            report.insert(selector, present);
        }

        report
    }
}

// Splits scraper's parse errors into "valid but unsupported" and "not CSS"
//
// scraper wraps errors from the selectors engine in
// UnexpectedSelectorParseError, whose Display text asks the user to file a
// bug report; we print the inner error kind instead.
fn selector_error(selector: &str, error: SelectorErrorKind<'_>) -> GradeError {
    match error {
        SelectorErrorKind::UnexpectedSelectorParseError(
            SelectorParseErrorKind::UnsupportedPseudoClassOrElement(name),
        ) => GradeError::UnsupportedSelector {
            selector: selector.to_string(),
            pseudo: name.to_string(),
        },
        SelectorErrorKind::UnexpectedSelectorParseError(kind) => GradeError::InvalidSelector {
            selector: selector.to_string(),
            message: format!("{:?}", kind),
        },
        other => GradeError::InvalidSelector {
            selector: selector.to_string(),
            message: other.to_string(),
        },
    }
}

/// Parses `html` once and checks every selector against it.
///
/// Example:
///   html = "<html><h1>Hi</h1></html>"
///   selectors = ["h1", "h2"]
///   result = {"h1": true, "h2": false}
pub fn check<S: AsRef<str>>(html: &str, selectors: &[S]) -> CheckReport {
    Checker::parse(html).check(selectors)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Checker struct instead of a global document?
//    - The parsed tree is an ordinary value owned by whoever parsed it
//    - Two Checkers for two pages can't step on each other
//    - Html isn't Send, so keeping it local also keeps the compiler happy
//
// 2. What does select(...).next().is_some() do?
//    - select() returns a lazy iterator over matching elements
//    - next() pulls at most one element, so we stop at the first match
//    - is_some() turns "found one" into true
//
// 3. Why AsRef<str>?
//    - Callers can pass &[String], &[&str], Vec<String>, ...
//    - selector.as_ref() gives us a &str either way
// -----------------------------------------------------------------------------
