//! CLI argument parsing for tfidf-viewer
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --url, --timeout

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{CompareArgs, VectorArgs};
use parse::{parse_format, parse_timeout};
pub use tfidf_viewer_core::format::OutputFormat;

/// tfidf-viewer - compare indexed documents by TF-IDF cosine similarity
#[derive(Parser, Debug)]
#[command(name = "tfidf-viewer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log each index request
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or full directives
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file to load instead of the default location
    #[arg(long, global = true, env = "TFIDF_VIEWER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Elasticsearch base URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = parse_timeout)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cosine similarity between the TF-IDF vectors of two indexed files
    Compare(CompareArgs),

    /// Print the TF-IDF vector of one indexed file
    Vector(VectorArgs),
}
