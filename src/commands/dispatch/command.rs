//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::source;
use trains_core::config::{ConfigSource, TrainsConfig};
use trains_core::error::Result;
use trains_core::graph::Graph;

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a PathBuf, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Resolve the active configuration
    pub fn load_config(&self) -> Result<(TrainsConfig, ConfigSource)> {
        let resolved = TrainsConfig::discover(self.cli.config.as_deref(), self.cwd)?;
        trace_command!(self.cli, self.start, "load_config");
        Ok(resolved)
    }

    /// Load the graph for a command that needs no other config.
    ///
    /// Config discovery only runs when neither `--routes` nor `--graph` is
    /// given.
    pub fn load_graph(&self) -> Result<Graph> {
        if source::has_explicit_source(self.cli) {
            let graph = source::load_graph(self.cli, None)?;
            trace_command!(self.cli, self.start, "load_graph");
            return Ok(graph);
        }

        let (config, _) = self.load_config()?;
        self.load_graph_with(&config)
    }

    /// Load the graph, falling back to the routes file of `config`
    pub fn load_graph_with(&self, config: &TrainsConfig) -> Result<Graph> {
        let graph = source::load_graph(self.cli, Some(config))?;
        trace_command!(self.cli, self.start, "load_graph");
        Ok(graph)
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
        println!("trains {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Distance, trip and shortest-route queries over a town graph.");
        println!();
        println!("Run `trains --help` for usage information.");
        Ok(())
    }
}
