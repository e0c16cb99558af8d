//! Walk counting bounded by stop count or by accumulated distance
//!
//! Walks may revisit towns and routes; only the bound guarantees
//! termination. The branching factor is exponential in the bound on cyclic
//! graphs, and on a graph with a zero-distance cycle the distance-bounded
//! count never terminates.

use tracing::debug;

use crate::graph::route::{Connection, Route};
use crate::graph::traversal::RouteProvider;
use crate::graph::types::{Distance, StopRange};

use super::shared::explore;

/// Count walks from `origin` to `destination` whose stop count lies in `stops`.
///
/// A walk is extended only while its stop count stays below `stops.max`.
#[tracing::instrument(skip(provider), fields(origin = %origin, destination = %destination, stops = %stops))]
pub fn count_walks_by_stops(
    provider: &dyn RouteProvider,
    origin: &str,
    destination: &str,
    stops: StopRange,
) -> usize {
    let mut count = 0usize;

    let expanded = explore(provider, origin, 0usize, |route: &Route, taken| {
        let next = taken + 1;
        if route.matches_destination(destination) && stops.contains(next) {
            count += 1;
        }
        (next < stops.max).then_some(next)
    });

    debug!(expanded, count, "count_walks_by_stops");
    count
}

/// Count walks from `origin` to `destination` whose total distance is
/// strictly below `max_distance`.
///
/// A route is followed only if the distance after taking it is still below
/// the bound, and a walk is counted on arriving at `destination` under the
/// same strict comparison. Walks landing exactly on the bound are excluded.
#[tracing::instrument(skip(provider), fields(origin = %origin, destination = %destination))]
pub fn count_walks_within_distance(
    provider: &dyn RouteProvider,
    origin: &str,
    destination: &str,
    max_distance: Distance,
) -> usize {
    let mut count = 0usize;

    let expanded = explore(provider, origin, 0, |route: &Route, travelled: Distance| {
        let next = travelled.saturating_add(route.distance());
        if next >= max_distance {
            return None;
        }
        if route.matches_destination(destination) {
            count += 1;
        }
        Some(next)
    });

    debug!(expanded, count, "count_walks_within_distance");
    count
}
