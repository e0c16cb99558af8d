//! Batch query reports
//!
//! A report is an ordered list of queries run against one graph. A query
//! that fails (an unreachable destination, a bad path) does not stop the
//! report; its line carries the error message instead of a value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{Distance, Graph, StopRange};

fn default_min_stops() -> usize {
    1
}

/// A single query against a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Distance along an exact path, e.g. `A,B,C`
    Distance { path: String },
    /// Number of walks with a stop count in `min_stops..=max_stops`
    Trips {
        from: String,
        to: String,
        #[serde(default = "default_min_stops")]
        min_stops: usize,
        max_stops: usize,
    },
    /// Number of walks shorter than `max_distance`
    Within {
        from: String,
        to: String,
        max_distance: Distance,
    },
    /// Minimum distance between two towns
    Shortest { from: String, to: String },
}

impl Query {
    pub fn distance(path: &str) -> Self {
        Query::Distance {
            path: path.to_string(),
        }
    }

    pub fn trips(from: &str, to: &str, stops: StopRange) -> Self {
        Query::Trips {
            from: from.to_string(),
            to: to.to_string(),
            min_stops: stops.min,
            max_stops: stops.max,
        }
    }

    pub fn within(from: &str, to: &str, max_distance: Distance) -> Self {
        Query::Within {
            from: from.to_string(),
            to: to.to_string(),
            max_distance,
        }
    }

    pub fn shortest(from: &str, to: &str) -> Self {
        Query::Shortest {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Run the query. Count queries never fail.
    pub fn run(&self, graph: &Graph) -> Result<u64> {
        match self {
            Query::Distance { path } => graph.calculate_distance_str(path),
            Query::Trips {
                from,
                to,
                min_stops,
                max_stops,
            } => Ok(graph.routes_to_destination(from, to, *min_stops, *max_stops) as u64),
            Query::Within {
                from,
                to,
                max_distance,
            } => Ok(graph.routes_within_distance(from, to, *max_distance) as u64),
            Query::Shortest { from, to } => graph.shortest_route(from, to),
        }
    }

    /// Short human description of the query
    pub fn describe(&self) -> String {
        match self {
            Query::Distance { path } => format!("distance of route {}", path),
            Query::Trips {
                from,
                to,
                min_stops,
                max_stops,
            } => format!(
                "trips {} -> {} with {} stops",
                from,
                to,
                StopRange::new(*min_stops, *max_stops)
            ),
            Query::Within {
                from,
                to,
                max_distance,
            } => format!("trips {} -> {} shorter than {}", from, to, max_distance),
            Query::Shortest { from, to } => format!("shortest route {} -> {}", from, to),
        }
    }
}

/// The queries run when no report is configured
pub fn default_queries() -> Vec<Query> {
    vec![
        Query::distance("A,B,C"),
        Query::distance("A,D"),
        Query::distance("A,D,C"),
        Query::distance("A,E,B,C,D"),
        Query::distance("A,E,D"),
        Query::trips("C", "C", StopRange::up_to(3)),
        Query::trips("A", "C", StopRange::exactly(4)),
        Query::shortest("A", "C"),
        Query::shortest("B", "B"),
        Query::within("C", "C", 30),
    ]
}

/// One line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// 1-based position in the report
    pub index: usize,
    pub query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportLine {
    /// The value, or the error message verbatim
    pub fn display_value(&self) -> String {
        match (&self.value, &self.error) {
            (Some(value), _) => value.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Run every query in order against `graph`
#[tracing::instrument(skip(graph, queries), fields(queries = queries.len()))]
pub fn run_report(graph: &Graph, queries: &[Query]) -> Vec<ReportLine> {
    queries
        .iter()
        .enumerate()
        .map(|(i, query)| {
            let outcome = query.run(graph);
            debug!(index = i + 1, query = %query.describe(), ok = outcome.is_ok(), "report_query");
            let (value, error) = match outcome {
                Ok(value) => (Some(value), None),
                Err(e) => (None, Some(e.to_string())),
            };
            ReportLine {
                index: i + 1,
                query: query.clone(),
                value,
                error,
            }
        })
        .collect()
}
