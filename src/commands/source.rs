//! Resolve where the route graph comes from

use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::cli::Cli;
use trains_core::bail_usage;
use trains_core::config::TrainsConfig;
use trains_core::error::{Result, TrainsError};
use trains_core::graph::Graph;

/// Path argument that reads routes from standard input
const STDIN_PATH: &str = "-";

/// True when `--routes` or `--graph` names the routes, so no config is needed
pub fn has_explicit_source(cli: &Cli) -> bool {
    cli.routes.is_some() || cli.graph.is_some()
}

/// Load the graph from `--routes`, then `--graph`, then the configured
/// routes file.
pub fn load_graph(cli: &Cli, config: Option<&TrainsConfig>) -> Result<Graph> {
    let mut graph = Graph::new();

    if let Some(routes) = cli.routes.as_deref() {
        debug!(source = "inline", "load_graph");
        graph.load_configs(routes)?;
    } else if let Some(path) = cli.graph.as_deref() {
        load_path(&mut graph, path)?;
    } else if let Some(path) = config.and_then(|config| config.routes_file.as_deref()) {
        load_path(&mut graph, path)?;
    } else {
        bail_usage!("no routes given: pass --routes, --graph, or set routes_file in trains.toml");
    }

    Ok(graph)
}

fn load_path(graph: &mut Graph, path: &Path) -> Result<usize> {
    if path == Path::new(STDIN_PATH) {
        debug!(source = "stdin", "load_graph");
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| TrainsError::io_operation("read routes from", "stdin", e))?;
        return graph.load_configs(&input);
    }

    debug!(source = %path.display(), "load_graph");
    graph.load_file(path)
}
