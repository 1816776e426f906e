// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only)
// 3. Grade the file or URL
// 4. Print the JSON report on stdout
// 5. Exit with proper code (0 = report printed, 1 = error)
//
// Rust concepts used:
// - async/await: The URL fetch is awaited before anything is printed
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

use clap::Parser; // Parser trait enables the parse() method
use html_grader::cli::Cli;
use html_grader::{grade, logging, report};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Missing files, bad checks.json, failed fetch...
            // Nothing has been written to stdout at this point
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(())  = report printed
//   Err     = something went wrong before a report could be produced
async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Validates --url up front; a file source is only checked for existence
    // when no URL is given
    let source = cli.source()?;

    let result = grade(&cli.checks, &source, cli.timeout()).await?;

    let json = report::render(&result)?;
    println!("{}", json);
    Ok(())
}
