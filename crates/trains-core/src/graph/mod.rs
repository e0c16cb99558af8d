//! Route graph and query operations
//!
//! Provides the graph of towns and one-way routes:
//! - `Route` / `Connection`: a single directed, weighted route
//! - `Graph`: the ordered route list and its queries
//! - `RouteProvider`: the read-only view the query algorithms run against
//! - `algos`: path distance, bounded walk counting, shortest route

pub mod algos;
pub mod network;
pub mod parse;
pub mod route;
pub mod traversal;
pub mod types;

pub use network::Graph;
pub use parse::{parse_path, parse_route_token, parse_routes};
pub use route::{Connection, Route};
pub use traversal::RouteProvider;
pub use types::{Distance, StopRange};
