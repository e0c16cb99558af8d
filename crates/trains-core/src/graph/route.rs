use serde::Serialize;

use super::types::Distance;

/// Read-only view of a directed, weighted connection between two towns
pub trait Connection {
    fn origin(&self) -> &str;
    fn destination(&self) -> &str;
    fn distance(&self) -> Distance;

    fn matches_origin(&self, town: &str) -> bool {
        self.origin() == town
    }

    fn matches_destination(&self, town: &str) -> bool {
        self.destination() == town
    }
}

/// A one-way route from `origin` to `destination`
///
/// Routes are immutable once built; two routes are equal when all three
/// fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    origin: String,
    destination: String,
    distance: Distance,
}

impl Route {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance: Distance,
    ) -> Self {
        Route {
            origin: origin.into(),
            destination: destination.into(),
            distance,
        }
    }
}

impl Connection for Route {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn destination(&self) -> &str {
        &self.destination
    }

    fn distance(&self) -> Distance {
        self.distance
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.origin, self.destination, self.distance)
    }
}
