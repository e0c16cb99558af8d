use tracing::debug;

use crate::bail_invalid;
use crate::error::{Result, TrainsError};
use crate::graph::route::Connection;
use crate::graph::traversal::RouteProvider;
use crate::graph::types::Distance;

/// Total distance along an exact sequence of towns.
///
/// Each consecutive pair must be joined by a direct route; the first
/// inserted route between a pair is used. Any missing hop fails the whole
/// path with `NoSuchRoute`.
pub fn path_distance<S: AsRef<str>>(
    provider: &dyn RouteProvider,
    towns: &[S],
) -> Result<Distance> {
    if towns.len() < 2 {
        let joined = towns
            .iter()
            .map(|town| town.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        bail_invalid!("route path (need at least two towns)", joined);
    }

    let mut total: Distance = 0;
    for pair in towns.windows(2) {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        let route = provider.first_route(from, to).ok_or_else(|| {
            debug!(from, to, "path_distance: missing hop");
            TrainsError::NoSuchRoute
        })?;
        total = total.saturating_add(route.distance());
    }

    Ok(total)
}
