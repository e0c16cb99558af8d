//! Argument structures for the query commands

use clap::Args;

use crate::cli::parse::parse_town;
use trains_core::graph::{Distance, StopRange};

/// Arguments for the trips command.
#[derive(Args, Debug)]
pub struct TripsArgs {
    /// Starting town
    #[arg(value_parser = parse_town)]
    pub from: String,

    /// Destination town
    #[arg(value_parser = parse_town)]
    pub to: String,

    /// Minimum number of stops
    #[arg(long, default_value_t = 1, conflicts_with = "exact")]
    pub min_stops: usize,

    /// Maximum number of stops
    #[arg(long, required_unless_present = "exact", conflicts_with = "exact")]
    pub max_stops: Option<usize>,

    /// Exact number of stops
    #[arg(long)]
    pub exact: Option<usize>,
}

impl TripsArgs {
    pub fn stop_range(&self) -> StopRange {
        match (self.exact, self.max_stops) {
            (Some(exact), _) => StopRange::exactly(exact),
            (None, Some(max)) => StopRange::new(self.min_stops, max),
            (None, None) => StopRange::new(self.min_stops, self.min_stops),
        }
    }
}

/// Arguments for the within command.
#[derive(Args, Debug)]
pub struct WithinArgs {
    /// Starting town
    #[arg(value_parser = parse_town)]
    pub from: String,

    /// Destination town
    #[arg(value_parser = parse_town)]
    pub to: String,

    /// Trips must be strictly shorter than this distance
    #[arg(long)]
    pub max_distance: Distance,
}

/// Arguments for the shortest command.
#[derive(Args, Debug)]
pub struct ShortestArgs {
    /// Starting town
    #[arg(value_parser = parse_town)]
    pub from: String,

    /// Destination town
    #[arg(value_parser = parse_town)]
    pub to: String,
}

/// Arguments for the edge command.
#[derive(Args, Debug)]
pub struct EdgeArgs {
    /// Origin town
    #[arg(value_parser = parse_town)]
    pub from: String,

    /// Destination town
    #[arg(value_parser = parse_town)]
    pub to: String,
}

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Routes file to record in the config
    #[arg(long)]
    pub routes_file: Option<std::path::PathBuf>,

    /// Overwrite an existing trains.toml
    #[arg(long)]
    pub force: bool,
}
