//! `trains edge` command - direct route lookup

use crate::cli::Cli;
use crate::commands::records::print_records_header;
use crate::output_by_format_result;
use trains_core::error::{Result, TrainsError};
use trains_core::graph::{Graph, RouteProvider};

/// Print the distance of the first direct route `from -> to`, 0 if none
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let distance = graph.get_distance(from, to);

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "origin": from,
                "destination": to,
                "distance": distance,
                "exists": graph.first_route(from, to).is_some(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), TrainsError>(())
        },
        human => {
            println!("{}", distance);
        },
        records => {
            print_records_header(
                "edge",
                &[
                    ("origin", from.to_string()),
                    ("destination", to.to_string()),
                    ("distance", distance.to_string()),
                ],
            );
        }
    )
}
