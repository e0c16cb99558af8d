//! Parsing for the route load format and the path query format
//!
//! Load format: comma-separated tokens `<origin><destination><digit>`, e.g.
//! `AB5, BC4`. Path format: comma-separated town ids, e.g. `A,B,C`.
//! Whitespace is insignificant in both.

use crate::bail_invalid;
use crate::error::{Result, TrainsError};

use super::route::Route;
use super::types::Distance;

const SEPARATOR: char = ',';

/// Remove every whitespace character from the input
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a single route token.
///
/// Position 0 is the origin, position 1 the destination and position 2 a
/// single distance digit. Anything after position 2 is ignored.
pub fn parse_route_token(token: &str) -> Result<Route> {
    let mut chars = token.chars();
    let (Some(origin), Some(destination), Some(digit)) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(TrainsError::malformed_token(
            token,
            "expected origin, destination and a distance digit",
        ));
    };

    let distance = digit.to_digit(10).ok_or_else(|| {
        TrainsError::malformed_token(token, format!("distance '{}' is not a digit", digit))
    })?;

    Ok(Route::new(
        origin.to_string(),
        destination.to_string(),
        Distance::from(distance),
    ))
}

/// Parse a full configuration string into routes, in input order.
///
/// Whitespace-only input yields no routes. The first bad token aborts the
/// parse.
pub fn parse_routes(input: &str) -> Result<Vec<Route>> {
    let compact = strip_whitespace(input);
    if compact.is_empty() {
        return Ok(Vec::new());
    }

    compact.split(SEPARATOR).map(parse_route_token).collect()
}

/// Parse a path query such as `A,B,C` into town ids
pub fn parse_path(query: &str) -> Result<Vec<String>> {
    let compact = strip_whitespace(query);
    let towns: Vec<String> = compact.split(SEPARATOR).map(str::to_string).collect();

    if towns.iter().any(String::is_empty) {
        bail_invalid!("route path", query);
    }
    if towns.len() < 2 {
        bail_invalid!("route path (need at least two towns)", query);
    }

    Ok(towns)
}
