//! The route graph: an ordered route list plus its queries
//!
//! A graph is built empty, filled by one or more bulk loads, then queried
//! read-only. Loading is the only mutation; share a graph across threads
//! only after it has been fully loaded.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TrainsError};
use crate::trace_time;

use super::algos::{count_walks_by_stops, count_walks_within_distance, path_distance, shortest_walk};
use super::parse::{parse_path, parse_routes};
use super::route::{Connection, Route};
use super::traversal::RouteProvider;
use super::types::{Distance, StopRange};

/// Directed, weighted, possibly cyclic graph of towns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    routes: Vec<Route>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a single configuration string
    pub fn from_configs(input: &str) -> Result<Self> {
        let mut graph = Graph::new();
        graph.load_configs(input)?;
        Ok(graph)
    }

    /// Parse `input` and append its routes in order.
    ///
    /// Returns the number of routes appended. On a malformed token nothing is
    /// appended.
    pub fn load_configs(&mut self, input: &str) -> Result<usize> {
        let start = Instant::now();
        let parsed = parse_routes(input)?;
        let added = parsed.len();
        self.routes.extend(parsed);

        debug!(added, total = self.routes.len(), "load_configs");
        trace_time!(start, "load_configs");
        Ok(added)
    }

    /// Read a routes file and append its routes
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .map_err(|e| TrainsError::io_operation("read routes file", path.display(), e))?;
        self.load_configs(&content)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Distinct towns in order of first appearance
    pub fn towns(&self) -> Vec<&str> {
        let mut towns: Vec<&str> = Vec::new();
        for route in &self.routes {
            for town in [route.origin(), route.destination()] {
                if !towns.contains(&town) {
                    towns.push(town);
                }
            }
        }
        towns
    }

    /// Total distance along an exact sequence of towns
    pub fn calculate_distance<S: AsRef<str>>(&self, towns: &[S]) -> Result<Distance> {
        path_distance(self, towns)
    }

    /// Total distance along a path written as `A,B,C`
    pub fn calculate_distance_str(&self, query: &str) -> Result<Distance> {
        let towns = parse_path(query)?;
        self.calculate_distance(&towns)
    }

    /// Number of walks from `origin` to `destination` with a stop count in
    /// `min_stops..=max_stops`
    pub fn routes_to_destination(
        &self,
        origin: &str,
        destination: &str,
        min_stops: usize,
        max_stops: usize,
    ) -> usize {
        count_walks_by_stops(self, origin, destination, StopRange::new(min_stops, max_stops))
    }

    /// Number of walks from `origin` to `destination` shorter than
    /// `max_distance`
    pub fn routes_within_distance(
        &self,
        origin: &str,
        destination: &str,
        max_distance: Distance,
    ) -> usize {
        count_walks_within_distance(self, origin, destination, max_distance)
    }

    /// Minimum distance from `origin` to `destination`
    pub fn shortest_route(&self, origin: &str, destination: &str) -> Result<Distance> {
        shortest_walk(self, origin, destination).ok_or(TrainsError::NoSuchRoute)
    }
}

impl RouteProvider for Graph {
    fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl FromIterator<Route> for Graph {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Graph {
            routes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Route> for Graph {
    fn extend<I: IntoIterator<Item = Route>>(&mut self, iter: I) {
        self.routes.extend(iter);
    }
}
