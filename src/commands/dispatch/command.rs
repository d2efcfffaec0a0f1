//! Command trait and context for dispatching commands

use std::time::Instant;

use tfidf_viewer_core::config::{ConfigOverrides, ViewerConfig};
use tfidf_viewer_core::error::Result;
use tfidf_viewer_core::index::ElasticClient;
use tfidf_viewer_core::viewer::Viewer;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{compare, vector};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Effective configuration: file, then environment, then flags
    pub fn config(&self) -> Result<ViewerConfig> {
        let overrides = ConfigOverrides {
            url: self.cli.url.clone(),
            timeout_seconds: self.cli.timeout,
        };
        let config = ViewerConfig::resolve(self.cli.config.as_deref(), &overrides)?;
        debug!(
            url = %config.url,
            timeout = config.timeout_seconds,
            elapsed = ?self.start.elapsed(),
            "resolve_config"
        );
        Ok(config)
    }

    /// Viewer backed by the configured Elasticsearch cluster
    pub fn viewer(&self) -> Result<Viewer<ElasticClient>> {
        let config = self.config()?;
        Ok(Viewer::new(ElasticClient::new(&config)?))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("tfidf-viewer {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Compare indexed documents by TF-IDF cosine similarity.");
        println!();
        println!("Run `tfidf-viewer --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Compare(args) => compare::execute(ctx.cli, &ctx.viewer()?, args),
            Commands::Vector(args) => vector::execute(ctx.cli, &ctx.viewer()?, args),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute");
        result
    }
}
