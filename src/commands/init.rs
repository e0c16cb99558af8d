//! `trains init` command - write a starter `trains.toml`

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::commands::records::print_records_header;
use crate::output_by_format_result;
use trains_core::bail_usage;
use trains_core::config::{ReportConfig, TrainsConfig, CONFIG_FILE};
use trains_core::error::{Result, TrainsError};
use trains_core::report::default_queries;

/// Execute the init command
///
/// The written config spells out the default report so it can be edited.
pub fn execute(cli: &Cli, root: &Path, routes_file: Option<PathBuf>, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail_usage!(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let config = TrainsConfig {
        routes_file,
        report: ReportConfig {
            queries: default_queries(),
        },
    };
    config.save(&path)?;

    tracing::debug!(path = %path.display(), "init");

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "config": path.display().to_string(),
                "queries": config.report.queries.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), TrainsError>(())
        },
        human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
            }
        },
        records => {
            print_records_header(
                "init",
                &[
                    ("config", path.display().to_string()),
                    ("status", "ok".to_string()),
                ],
            );
        }
    )
}
