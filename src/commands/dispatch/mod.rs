//! Command dispatch logic for trains

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use trains_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    debug!(elapsed = ?start.elapsed(), "resolve_cwd");

    let ctx = CommandContext::new(cli, &cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
