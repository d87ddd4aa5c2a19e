//! HTML fragment builders for the dynamic page regions.
//!
//! Pure string assembly, kept apart from the DOM plumbing so the markup can
//! be unit tested natively. Class names and inline styles follow the page
//! stylesheet shipped with the device.

use ntp_panel_config::Notice;
use ntp_panel_renderer::{
    detail_items, gnss_control_rows, narrative_for, DisplayFilterState, GnssControlRow,
    SummaryCards,
};
use ntp_panel_shared::format::{format_memory_kb, format_uptime};
use ntp_panel_shared::{DeviceStatus, SystemLogs, SystemMetrics, TelemetrySnapshot};

/// How many log entries the status page tail shows
const LOG_TAIL_LEN: usize = 5;

pub fn banner_html(notice: &Notice) -> String {
    format!(
        "<div class=\"message {}\">{}</div>",
        notice.kind.css_class(),
        notice.text
    )
}

/// The stat-card strip: Total and Used first, then per-constellation cards.
/// Cards for systems the receiver has switched off render dimmed.
pub fn summary_cards_html(cards: &SummaryCards) -> String {
    let mut html = format!(
        "<div class=\"stat-card\"><strong>Total</strong> {}</div>\n\
         <div class=\"stat-card\"><strong>Used</strong> {}</div>\n",
        cards.satellites_total, cards.satellites_used
    );
    for card in &cards.constellations {
        let dim = if card.device_enabled {
            ""
        } else {
            "; opacity: 0.5"
        };
        html.push_str(&format!(
            "<div class=\"stat-card\" style=\"border-left: 4px solid {}{}\"><strong>{}</strong> {}/{}</div>\n",
            card.color, dim, card.label, card.used, card.total
        ));
    }
    html
}

/// One checkbox row per constellation. The checkbox reflects the view
/// filter; the label text reflects what the receiver hardware tracks.
/// Change events are expected to be wired by delegation on the container.
pub fn gnss_controls_html(rows: &[GnssControlRow]) -> String {
    let mut html = String::new();
    for row in rows {
        let checked = if row.checked { " checked" } else { "" };
        let state = if row.device_enabled {
            "(Enabled)"
        } else {
            "(Disabled)"
        };
        html.push_str("<div style=\"margin: 5px 0; display: flex; align-items: center;\">");
        html.push_str(&format!(
            "<input type=\"checkbox\" id=\"filter_{}\"{}>",
            row.key, checked
        ));
        html.push_str(&format!(
            "<div style=\"width: 16px; height: 16px; background: {}; margin: 0 8px; border-radius: 2px;\"></div>",
            row.color
        ));
        html.push_str(&format!(
            "<label for=\"filter_{}\" style=\"font-size: 12px;\">{} {}</label>",
            row.key, row.label, state
        ));
        html.push_str("</div>\n");
    }
    html
}

pub fn gnss_controls_for(snapshot: &TelemetrySnapshot, filter: &DisplayFilterState) -> String {
    gnss_controls_html(&gnss_control_rows(snapshot, filter))
}

/// The date/position readout, or a placeholder line while there is no
/// position-qualifying fix.
pub fn detail_section_html(snapshot: &TelemetrySnapshot) -> String {
    if let Some(text) = narrative_for(snapshot).placeholder() {
        return format!("<div class=\"info-item\">{text}</div>\n");
    }

    let mut html = String::new();
    for item in detail_items(snapshot) {
        html.push_str(&format!(
            "<div class=\"info-item\"><strong>{}</strong> {}</div>\n",
            item.label, item.value
        ));
    }
    html
}

fn status_item(label: &str, value: impl std::fmt::Display) -> String {
    format!("<div class=\"status-item\"><label>{label}:</label><span>{value}</span></div>\n")
}

fn indicator_item(label: &str, css: &str, value: impl std::fmt::Display) -> String {
    format!(
        "<div class=\"status-item\"><label>{label}:</label><span class=\"status-indicator {css}\">{value}</span></div>\n"
    )
}

/// The eight-item status grid on the configuration page
pub fn status_grid_html(status: &DeviceStatus, metrics: &SystemMetrics) -> String {
    let mut html = String::new();

    let (fix_css, fix_text) = if status.gps_fix {
        ("status-ok", "Fixed")
    } else {
        ("status-error", "No Fix")
    };
    html.push_str(&indicator_item("GPS Status", fix_css, fix_text));
    html.push_str(&status_item("Satellites", status.satellites));

    let (net_css, net_text) = if status.network_connected {
        ("status-ok", "Connected")
    } else {
        ("status-error", "Disconnected")
    };
    html.push_str(&indicator_item("Network Status", net_css, net_text));
    html.push_str(&status_item(
        "IP Address",
        status.ip_address.as_deref().unwrap_or("N/A"),
    ));

    html.push_str(&status_item("NTP Requests", metrics.ntp_requests));
    html.push_str(&status_item("Uptime", format_uptime(metrics.uptime_seconds)));
    html.push_str(&status_item(
        "Memory Usage",
        format_memory_kb(metrics.memory_used),
    ));
    html.push_str(&indicator_item(
        "System Health",
        metrics.health_level().css_class(),
        format!("{:.1}%", metrics.health_score),
    ));

    html
}

/// Short log tail, newest last
pub fn recent_logs_html(logs: &SystemLogs) -> String {
    if logs.logs.is_empty() {
        return "<div class=\"log-line\">No recent log entries</div>\n".to_string();
    }

    let start = logs.logs.len().saturating_sub(LOG_TAIL_LEN);
    let mut html = String::new();
    for entry in &logs.logs[start..] {
        let level = entry.level.as_deref().unwrap_or("info");
        html.push_str(&format!(
            "<div class=\"log-line\">[{}] {}</div>\n",
            level, entry.message
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntp_panel_renderer::summary_cards;
    use ntp_panel_shared::LogEntry;

    #[test]
    fn test_banner_html_carries_kind_class() {
        let html = banner_html(&Notice::error("Failed to save configuration"));
        assert_eq!(
            html,
            "<div class=\"message error\">Failed to save configuration</div>"
        );
    }

    #[test]
    fn test_summary_cards_dim_disabled_systems() {
        let snapshot: TelemetrySnapshot = serde_json::from_str(
            r#"{
                "satellites_total": 5,
                "satellites_used": 2,
                "constellation_stats": {
                    "satellites_total": 5,
                    "satellites_used": 2,
                    "gps": {"total": 3, "used": 2},
                    "beidou": {"total": 2, "used": 0}
                },
                "constellation_enables": {
                    "gps": true, "sbas": true, "galileo": true,
                    "beidou": false, "glonass": true, "qzss": true
                }
            }"#,
        )
        .unwrap();

        let html = summary_cards_html(&summary_cards(&snapshot));

        assert!(html.contains("<strong>Total</strong> 5"));
        assert!(html.contains("<strong>Used</strong> 2"));
        assert!(html.contains("border-left: 4px solid #f39c12\""));
        assert!(html.contains("<strong>GPS</strong> 2/3"));
        assert!(html.contains("border-left: 4px solid #9b59b6; opacity: 0.5"));
        assert!(html.contains("<strong>BeiDou</strong> 0/2"));
        // No satellites in view for these, so no cards
        assert!(!html.contains("GLONASS"));
        assert!(!html.contains("QZSS"));
    }

    #[test]
    fn test_gnss_controls_reflect_filter_and_device_state() {
        let snapshot: TelemetrySnapshot = serde_json::from_str(
            r#"{"constellation_enables": {
                "gps": true, "sbas": true, "galileo": true,
                "beidou": true, "glonass": false, "qzss": true
            }}"#,
        )
        .unwrap();
        let mut filter = DisplayFilterState::default();
        filter.constellations.set_enabled(ntp_panel_shared::Constellation::Sbas, false);

        let html = gnss_controls_for(&snapshot, &filter);

        assert!(html.contains("id=\"filter_gps\" checked"));
        assert!(html.contains("id=\"filter_sbas\">"));
        assert!(!html.contains("id=\"filter_sbas\" checked"));
        assert!(html.contains("GLONASS (Disabled)"));
        assert!(html.contains("GPS (Enabled)"));
    }

    #[test]
    fn test_detail_section_placeholder_without_signal() {
        let html = detail_section_html(&TelemetrySnapshot::default());
        assert_eq!(
            html,
            "<div class=\"info-item\">No GPS signal received</div>\n"
        );
    }

    #[test]
    fn test_detail_section_lists_fix_readout() {
        let snapshot: TelemetrySnapshot = serde_json::from_str(
            r#"{
                "latitude": 35.681236, "longitude": 139.767125,
                "altitude": 40.5, "speed": 1.5, "course": 90.0,
                "utc_time": 1700000000, "ttff": 28, "fix_type": 3,
                "hdop": 0.8, "vdop": 1.2,
                "accuracy_2d": 2.5, "accuracy_3d": 3.1,
                "satellites_total": 12, "satellites_used": 8,
                "data_valid": true
            }"#,
        )
        .unwrap();

        let html = detail_section_html(&snapshot);

        assert!(html.contains("<strong>Fix Status</strong> 3D Fix (Type 3)"));
        assert!(html.contains("<strong>Position</strong> 35.681236°, 139.767125°"));
        assert!(html.contains("<strong>UTC Time</strong> 2023-11-14T22:13:20.000Z"));
        assert!(html.contains("<strong>TTFF</strong> 28 seconds"));
    }

    #[test]
    fn test_status_grid_renders_all_eight_items() {
        let status = DeviceStatus {
            gps_fix: true,
            satellites: 9,
            network_connected: true,
            ip_address: Some("192.168.1.50".to_string()),
            ..DeviceStatus::default()
        };
        let metrics = SystemMetrics {
            ntp_requests: 1234,
            uptime_seconds: 90_061,
            memory_used: 126_976,
            health_score: 92.5,
        };

        let html = status_grid_html(&status, &metrics);

        assert!(html.contains("GPS Status:"));
        assert!(html.contains("status-indicator status-ok\">Fixed"));
        assert!(html.contains("<span>9</span>"));
        assert!(html.contains("status-ok\">Connected"));
        assert!(html.contains("<span>192.168.1.50</span>"));
        assert!(html.contains("<span>1234</span>"));
        assert!(html.contains("<span>1d 1h 1m</span>"));
        assert!(html.contains("<span>124.0 KB</span>"));
        assert!(html.contains("status-ok\">92.5%"));
    }

    #[test]
    fn test_status_grid_failure_styles() {
        let html = status_grid_html(
            &DeviceStatus::default(),
            &SystemMetrics {
                health_score: 45.0,
                ..SystemMetrics::default()
            },
        );

        assert!(html.contains("status-error\">No Fix"));
        assert!(html.contains("status-error\">Disconnected"));
        assert!(html.contains("<span>N/A</span>"));
        assert!(html.contains("status-error\">45.0%"));
    }

    #[test]
    fn test_log_tail_keeps_newest_five() {
        let logs = SystemLogs {
            logs: (1..=7)
                .map(|n| LogEntry {
                    level: Some("info".to_string()),
                    message: format!("entry {n}"),
                    timestamp: None,
                })
                .collect(),
        };

        let html = recent_logs_html(&logs);

        assert!(!html.contains("entry 2"));
        assert!(html.contains("[info] entry 3"));
        assert!(html.contains("[info] entry 7"));
        assert!(html.ends_with("entry 7</div>\n"));
    }

    #[test]
    fn test_log_tail_empty_placeholder() {
        let html = recent_logs_html(&SystemLogs::default());
        assert!(html.contains("No recent log entries"));
    }
}
