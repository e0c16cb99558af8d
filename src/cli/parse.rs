//! Value parsers for CLI arguments

use trains_core::graph::parse_path;

/// Parse a town id: trimmed and non-empty, without separators
pub fn parse_town(s: &str) -> Result<String, String> {
    let town = s.trim();
    if town.is_empty() {
        return Err("town must not be empty".to_string());
    }
    if town.contains(',') || town.contains(char::is_whitespace) {
        return Err(format!("invalid town '{}': no commas or spaces", town));
    }
    Ok(town.to_string())
}

/// Validate a comma-separated route path, keeping it as written
pub fn parse_route_path(s: &str) -> Result<String, String> {
    parse_path(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
