//! Shortest route by bounded walk search
//!
//! This is not Dijkstra. Every walk out of the origin is explored, and a walk
//! keeps extending while its accumulated distance is below the graph's
//! `length()`. The minimum over every arrival at the destination wins.
//!
//! The ceiling is an approximation: it is not tied to the cycle structure, so
//! it can over-explore graphs with long cycles, and under parallel routes
//! (where `length()` double-counts the first match) it can cut walks short.
//! A zero-distance cycle reachable below the ceiling never terminates.

use tracing::debug;

use crate::graph::route::{Connection, Route};
use crate::graph::traversal::RouteProvider;
use crate::graph::types::Distance;

use super::shared::explore;

/// Minimum total distance over the explored walks from `origin` to
/// `destination`, or `None` when no walk reaches it.
#[tracing::instrument(skip(provider), fields(origin = %origin, destination = %destination))]
pub fn shortest_walk(
    provider: &dyn RouteProvider,
    origin: &str,
    destination: &str,
) -> Option<Distance> {
    let ceiling = provider.length();
    let mut best: Option<Distance> = None;

    let expanded = explore(provider, origin, 0, |route: &Route, travelled: Distance| {
        let arrival = travelled.saturating_add(route.distance());
        if route.matches_destination(destination) {
            best = Some(best.map_or(arrival, |current| current.min(arrival)));
        }
        (travelled < ceiling).then_some(arrival)
    });

    debug!(expanded, ceiling, best = ?best, "shortest_walk");
    best
}
