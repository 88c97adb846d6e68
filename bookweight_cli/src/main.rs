//! # Bookweight CLI Application
//!
//! Asks for a book's page width, page height and page count on the
//! terminal, then prints an estimate of how much the paper weighs.
//!
//! Set `RUST_LOG=debug` to see each attempt and the full result as JSON on
//! stderr.

mod logger;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bookweight_core::errors::PromptError;
use bookweight_core::prompt::TerminalConsole;
use bookweight_core::session::run_session;
use bookweight_core::settings::CalculatorSettings;
use bookweight_core::BookWeightResult;

/// Run one session over `input`/`output` and print the result line.
fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    settings: &CalculatorSettings,
) -> Result<BookWeightResult, PromptError> {
    let mut console = TerminalConsole::new(input, output);
    let result = run_session(&mut console, settings)?;

    if let Ok(json) = serde_json::to_string(&result) {
        tracing::debug!(%json, "result");
    }

    let (_, mut output) = console.into_parts();
    writeln!(output, "{}", result)?;
    output.flush()?;
    Ok(result)
}

fn main() -> ExitCode {
    logger::init_cli_logger();

    let settings = CalculatorSettings::default();
    tracing::debug!(?settings, "starting session");

    match run(io::stdin().lock(), io::stdout(), &settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "session failed: {}", e);
            eprintln!();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
