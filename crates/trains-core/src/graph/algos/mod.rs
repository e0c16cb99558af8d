//! Graph query algorithm implementations
//!
//! - `path`: distance along an exact sequence of towns
//! - `walks`: walk counting bounded by stops or by distance
//! - `shortest`: minimum distance by bounded walk search
//! - `shared`: the depth-first worklist driver used by the walk searches

pub mod path;
pub mod shared;
pub mod shortest;
pub mod walks;

pub use path::path_distance;
pub use shared::explore;
pub use shortest::shortest_walk;
pub use walks::{count_walks_by_stops, count_walks_within_distance};
