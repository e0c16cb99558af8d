//! Format output dispatch helpers

/// Macro for format dispatch that automatically wraps result handling.
/// Use when the json branch returns Result and human/records return ().
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&value) },
///     human => { println!("{}", value); },
///     records => { println!("H trains=1 records=1 mode=edge"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
