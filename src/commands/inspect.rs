//! `trains inspect` command - show the loaded graph

use crate::cli::Cli;
use crate::commands::records::{print_records_header, records_line};
use crate::output_by_format_result;
use trains_core::error::{Result, TrainsError};
use trains_core::graph::{Connection, Graph, RouteProvider};

/// Print the routes in load order with the graph totals
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let towns = graph.towns();
    let length = graph.length();
    let total = graph.total_distance();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "routes": graph.routes(),
                "towns": towns,
                "length": length,
                "total_distance": total,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), TrainsError>(())
        },
        human => {
            println!("Routes: {}", graph.len());
            println!("Towns: {}", towns.join(", "));
            println!("Length: {}", length);
            println!("Total distance: {}", total);
            if !graph.is_empty() && !cli.quiet {
                println!();
                for route in graph.routes() {
                    println!(
                        "  {} -> {} ({})",
                        route.origin(),
                        route.destination(),
                        route.distance()
                    );
                }
            }
        },
        records => {
            print_records_header(
                "inspect",
                &[
                    ("routes", graph.len().to_string()),
                    ("towns", towns.len().to_string()),
                    ("length", length.to_string()),
                    ("total_distance", total.to_string()),
                ],
            );
            for route in graph.routes() {
                println!(
                    "{}",
                    records_line(
                        "R",
                        &[
                            ("origin", route.origin().to_string()),
                            ("destination", route.destination().to_string()),
                            ("distance", route.distance().to_string()),
                        ],
                    )
                );
            }
        }
    )
}
