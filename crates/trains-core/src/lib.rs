//! Trains Core Library
//!
//! Route graph model and query algorithms for the trains CLI: load a list of
//! one-way weighted routes between towns, then ask for path distances, walk
//! counts bounded by stops or distance, and shortest routes.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod report;
