//! Display formatting helpers shared by both pages

/// Speed unit conversions from the wire's meters per second
pub fn mps_to_kmh(mps: f32) -> f32 {
    mps * 3.6
}

pub fn mps_to_mph(mps: f32) -> f32 {
    mps * 2.237
}

/// Uptime as `12d 3h 4m`, dropping leading zero units
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Unix seconds as an ISO-8601 UTC timestamp; zero renders as not-available
pub fn format_utc(epoch_seconds: u32) -> String {
    if epoch_seconds == 0 {
        return "N/A".to_string();
    }
    chrono::DateTime::from_timestamp(i64::from(epoch_seconds), 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Memory usage as `123.4 KB`
pub fn format_memory_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
