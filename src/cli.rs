// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). Every flag can also be
// set through an HTML_GRADER_* environment variable.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::source::{Source, DEFAULT_TIMEOUT};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Grade an HTML file or page for the presence of CSS selectors",
    long_about = "html-grader reads a list of CSS selectors from a JSON file, checks whether each one \
                  matches anything in an HTML document (local file or URL) and prints a JSON object \
                  mapping every selector to true or false."
)]
pub struct Cli {
    /// Path to the JSON array of selectors to check
    #[arg(short, long = "checks", value_name = "CHECKS_FILE", default_value = "checks.json", env = "HTML_GRADER_CHECKS")]
    pub checks: PathBuf,

    /// Path to the HTML file to grade (ignored when --url is given)
    #[arg(short, long = "file", value_name = "HTML_FILE", default_value = "index.html", env = "HTML_GRADER_FILE")]
    pub file: PathBuf,

    /// URL of a page to grade instead of a local file
    #[arg(short, long, env = "HTML_GRADER_URL")]
    pub url: Option<String>,

    /// Seconds to wait for the page when using --url
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..),
        env = "HTML_GRADER_TIMEOUT"
    )]
    pub timeout: u64,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The document to grade. --url takes precedence over --file.
    pub fn source(&self) -> Result<Source> {
        Source::resolve(self.file.clone(), self.url.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
