//! CLI argument parsing for trains
//!
//! Global flags select the routes source, config file, output format and
//! logging; each subcommand is one query or a batch report.

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{EdgeArgs, InitArgs, ShortestArgs, TripsArgs, WithinArgs};
pub use trains_core::format::OutputFormat;

/// Trains - query distances, trips and shortest routes over a town graph
#[derive(Parser, Debug)]
#[command(name = "trains")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Inline routes, e.g. "AB5, BC4, CD8"
    #[arg(long, global = true, conflicts_with = "graph")]
    pub routes: Option<String>,

    /// Routes file to load ("-" reads stdin)
    #[arg(long, short = 'g', global = true)]
    pub graph: Option<PathBuf>,

    /// Config file (defaults to ./trains.toml, then the user config dir)
    #[arg(long, global = true, env = "TRAINS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter level or directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distance along an exact route, e.g. "A,B,C"
    Distance {
        /// Comma-separated towns
        #[arg(value_parser = parse::parse_route_path)]
        path: String,
    },

    /// Count trips between two towns bounded by number of stops
    Trips(TripsArgs),

    /// Count trips between two towns shorter than a distance
    Within(WithinArgs),

    /// Length of the shortest route between two towns
    Shortest(ShortestArgs),

    /// Distance of the direct route between two towns (0 if none)
    Edge(EdgeArgs),

    /// Show the loaded routes and graph totals
    Inspect,

    /// Run the configured (or default) batch of queries
    Report,

    /// Write a trains.toml with the default report
    Init(InitArgs),
}
