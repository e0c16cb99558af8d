//! Command implementations for all trains commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use trains_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{EdgeArgs, InitArgs};
    use crate::commands::{edge, init, inspect, query, report};
    use trains_core::report::Query;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Distance { path } => execute_query(ctx, Query::distance(path)),
            Commands::Trips(args) => {
                execute_query(ctx, Query::trips(&args.from, &args.to, args.stop_range()))
            }
            Commands::Within(args) => {
                execute_query(ctx, Query::within(&args.from, &args.to, args.max_distance))
            }
            Commands::Shortest(args) => execute_query(ctx, Query::shortest(&args.from, &args.to)),
            Commands::Edge(args) => execute_edge(ctx, args),
            Commands::Inspect => execute_inspect(ctx),
            Commands::Report => execute_report(ctx),
            Commands::Init(args) => execute_init(ctx, args),
        }
    }

    fn execute_query(ctx: &CommandContext, query: Query) -> Result<()> {
        let graph = ctx.load_graph()?;
        query::execute(ctx.cli, &graph, &query)
    }

    fn execute_edge(ctx: &CommandContext, args: &EdgeArgs) -> Result<()> {
        let graph = ctx.load_graph()?;
        edge::execute(ctx.cli, &graph, &args.from, &args.to)
    }

    fn execute_inspect(ctx: &CommandContext) -> Result<()> {
        let graph = ctx.load_graph()?;
        inspect::execute(ctx.cli, &graph)
    }

    fn execute_report(ctx: &CommandContext) -> Result<()> {
        let (config, source) = ctx.load_config()?;
        let graph = ctx.load_graph_with(&config)?;
        report::execute(ctx.cli, &graph, &config, &source)
    }

    fn execute_init(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
        init::execute(ctx.cli, ctx.cwd, args.routes_file.clone(), args.force)
    }
}
