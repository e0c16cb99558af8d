//! `trains report` command - run a batch of queries
//!
//! Queries come from the `[report]` table of the active config, or the
//! built-in default report. Failed queries are printed inline and do not
//! change the exit code.

use crate::cli::Cli;
use crate::commands::query::query_kind;
use crate::commands::records::{print_records_header, records_line};
use crate::output_by_format_result;
use trains_core::config::{ConfigSource, TrainsConfig};
use trains_core::error::{Result, TrainsError};
use trains_core::graph::Graph;
use trains_core::report::{run_report, ReportLine};

/// Execute the report command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    config: &TrainsConfig,
    source: &ConfigSource,
) -> Result<()> {
    let queries = config.report.effective_queries();
    let lines = run_report(graph, &queries);

    tracing::debug!(
        queries = queries.len(),
        failed = lines.iter().filter(|line| line.error.is_some()).count(),
        config = ?source.path(),
        "report"
    );

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "routes": graph.len(),
                "results": lines,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), TrainsError>(())
        },
        human => {
            for line in &lines {
                println!("Output #{}: {}", line.index, line.display_value());
            }
        },
        records => {
            print_records_header(
                "report",
                &[
                    ("routes", graph.len().to_string()),
                    ("queries", lines.len().to_string()),
                ],
            );
            for line in &lines {
                println!("{}", report_record(line));
            }
        }
    )
}

fn report_record(line: &ReportLine) -> String {
    let mut fields = vec![
        ("index", line.index.to_string()),
        ("kind", query_kind(&line.query).to_string()),
        ("query", line.query.describe()),
    ];
    match (&line.value, &line.error) {
        (Some(value), _) => fields.push(("value", value.to_string())),
        (None, Some(error)) => fields.push(("error", error.clone())),
        (None, None) => {}
    }
    records_line("Q", &fields)
}
