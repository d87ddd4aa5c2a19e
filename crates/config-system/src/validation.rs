//! Field validators shared by the section forms

use once_cell::sync::Lazy;
use regex::Regex;

static IP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());

/// Dotted quad with every octet 0-255
pub fn is_valid_ip(text: &str) -> bool {
    IP_PATTERN.is_match(text)
}

/// 1-31 characters, alphanumeric and hyphens only
pub fn is_valid_hostname(text: &str) -> bool {
    !text.is_empty() && text.len() <= 31 && HOSTNAME_PATTERN.is_match(text)
}

/// Parse a port field, 1-65535
pub fn parse_port(raw: &str, label: &str) -> Result<u16, String> {
    match raw.trim().parse::<u32>() {
        Ok(port) if (1..=65_535).contains(&port) => Ok(port as u16),
        _ => Err(format!("Invalid {label}: {raw}. Must be between 1 and 65535")),
    }
}

/// Parse the GNSS update rate field, 1-10 Hz
pub fn parse_update_rate(raw: &str) -> Result<u8, String> {
    match raw.trim().parse::<u8>() {
        Ok(rate) if (1..=10).contains(&rate) => Ok(rate),
        _ => Err(format!("Invalid update rate: {raw}. Must be between 1 and 10 Hz")),
    }
}

/// Parse the auto-restart interval field, 1-168 hours
pub fn parse_restart_interval(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(hours) if (1..=168).contains(&hours) => Ok(hours),
        _ => Err(format!(
            "Invalid restart interval: {raw}. Must be between 1 and 168 hours"
        )),
    }
}

/// Parse a dropdown-backed small integer; the markup constrains the range
pub fn parse_selector(raw: &str, label: &str) -> Result<u8, String> {
    raw.trim()
        .parse::<u8>()
        .map_err(|_| format!("Invalid {label} value"))
}
