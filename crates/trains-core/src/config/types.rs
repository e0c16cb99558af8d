//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::{default_queries, Query};

/// Project configuration, read from `trains.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainsConfig {
    /// Routes file used when no routes are given on the command line.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes_file: Option<PathBuf>,

    /// Report configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Queries run by `trains report`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Configured queries; empty means the built-in default report
    #[serde(default)]
    pub queries: Vec<Query>,
}

impl ReportConfig {
    /// Configured queries, falling back to the built-in default report
    pub fn effective_queries(&self) -> Vec<Query> {
        if self.queries.is_empty() {
            default_queries()
        } else {
            self.queries.clone()
        }
    }
}
