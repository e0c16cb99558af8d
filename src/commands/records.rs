//! Records output helpers
//!
//! Records output is line-oriented: one `H` header line, then one line per
//! item, each a prefix letter followed by `key=value` fields.

use trains_core::format::record_value;

/// Records format version written in every header
pub const RECORDS_VERSION: u32 = 1;

/// Print the `H` header line for a command
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    let prefix = format!("H trains=1 records={} mode={}", RECORDS_VERSION, mode);
    println!("{}", records_line(&prefix, fields));
}

/// Join a prefix with `key=value` fields, quoting values where needed
pub fn records_line(prefix: &str, fields: &[(&str, String)]) -> String {
    let mut line = prefix.to_string();
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(&record_value(value));
    }
    line
}
