//! tfidf-viewer - TF-IDF similarity between indexed documents
//!
//! Looks up two files in an Elasticsearch index by the path they were
//! indexed under, weights their terms by TF-IDF and reports the cosine
//! similarity of the two vectors.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use tfidf_viewer_core::error::TfidfError;
use tfidf_viewer_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, cli.format, cli.quiet),
    }
}

/// Handle an argv clap rejected.
///
/// `--format` may never have been parsed, so it is read from the raw
/// arguments. Help and version output always goes through clap.
fn parse_failure(err: clap::Error) -> ExitCode {
    let format = format_from_args(env::args().skip(1));
    if format == OutputFormat::Human || !err.use_stderr() {
        err.exit();
    }
    report(&TfidfError::UsageError(err.to_string()), format, false)
}

/// Output format requested in raw arguments, `human` when absent or invalid
fn format_from_args(args: impl IntoIterator<Item = String>) -> OutputFormat {
    let mut format = OutputFormat::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if let Some(requested) = value.and_then(|v| v.parse().ok()) {
            format = requested;
        }
    }
    format
}

/// Print `error` in the requested format and map it to the process exit code
fn report(error: &TfidfError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}
