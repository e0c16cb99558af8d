//! Single-query commands: `distance`, `trips`, `within`, `shortest`
//!
//! A query that has no answer (`NO SUCH ROUTE`) is returned as an error so
//! the process exits with the data-error code.

use crate::cli::Cli;
use crate::commands::records::{print_records_header, records_line};
use crate::output_by_format_result;
use trains_core::error::{Result, TrainsError};
use trains_core::graph::Graph;
use trains_core::report::Query;

/// Execute a single query and print its value
pub fn execute(cli: &Cli, graph: &Graph, query: &Query) -> Result<()> {
    let value = query.run(graph)?;

    tracing::debug!(query = %query.describe(), value, "query");

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "query": query,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), TrainsError>(())
        },
        human => {
            println!("{}", value);
        },
        records => {
            print_records_header(query_kind(query), &[("routes", graph.len().to_string())]);
            println!(
                "{}",
                records_line(
                    "Q",
                    &[
                        ("kind", query_kind(query).to_string()),
                        ("query", query.describe()),
                        ("value", value.to_string()),
                    ],
                )
            );
        }
    )
}

/// Records mode name for a query
pub fn query_kind(query: &Query) -> &'static str {
    match query {
        Query::Distance { .. } => "distance",
        Query::Trips { .. } => "trips",
        Query::Within { .. } => "within",
        Query::Shortest { .. } => "shortest",
    }
}
