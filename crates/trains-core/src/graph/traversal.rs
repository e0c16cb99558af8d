use super::route::{Connection, Route};
use super::types::Distance;

/// Trait for providing an ordered route list to the query algorithms
///
/// Every lookup honours insertion order: the first matching route wins.
pub trait RouteProvider {
    fn routes(&self) -> &[Route];

    /// Routes leaving `origin`, in insertion order
    fn outbound_routes(&self, origin: &str) -> Vec<&Route> {
        self.routes()
            .iter()
            .filter(|route| route.matches_origin(origin))
            .collect()
    }

    /// First inserted route from `origin` to `destination`
    fn first_route(&self, origin: &str, destination: &str) -> Option<&Route> {
        self.routes()
            .iter()
            .find(|route| route.matches_origin(origin) && route.matches_destination(destination))
    }

    /// Distance of the first direct route, or 0 when there is none.
    ///
    /// A zero-weight route is indistinguishable from a missing one here.
    fn get_distance(&self, origin: &str, destination: &str) -> Distance {
        self.first_route(origin, destination)
            .map_or(0, |route| route.distance())
    }

    /// Sum over every stored route of `get_distance(origin, destination)`.
    ///
    /// Each route is re-resolved through first-match lookup, so parallel
    /// routes all contribute the first one's distance. This is also the
    /// search ceiling used by the shortest-route query.
    fn length(&self) -> Distance {
        self.routes()
            .iter()
            .map(|route| self.get_distance(route.origin(), route.destination()))
            .fold(0, Distance::saturating_add)
    }

    /// Sum of the stored distances of every route
    fn total_distance(&self) -> Distance {
        self.routes()
            .iter()
            .map(Connection::distance)
            .fold(0, Distance::saturating_add)
    }
}

impl RouteProvider for [Route] {
    fn routes(&self) -> &[Route] {
        self
    }
}

impl RouteProvider for Vec<Route> {
    fn routes(&self) -> &[Route] {
        self
    }
}
