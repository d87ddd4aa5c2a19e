//! Snapshot-to-snapshot change detection
//!
//! Decides whether a fresh telemetry snapshot differs enough from the one
//! before it to justify repainting the dashboard.

use ntp_panel_shared::TelemetrySnapshot;

/// Minimum position delta that counts as movement, in degrees
pub const POSITION_THRESHOLD_DEGREES: f64 = 0.00001;

/// Tunable thresholds for change detection
#[derive(Debug, Clone)]
pub struct ChangeDetectionConfig {
    pub position_threshold_degrees: f64,
}

impl Default for ChangeDetectionConfig {
    fn default() -> Self {
        Self {
            position_threshold_degrees: POSITION_THRESHOLD_DEGREES,
        }
    }
}

/// What changed between two snapshots
#[derive(Debug, Clone, Default)]
pub struct TelemetryChanges {
    pub has_changes: bool,
    pub position_changed: bool,
    pub fix_type_changed: bool,
    pub satellite_count_changed: bool,
    pub change_summary: Vec<String>,
}

/// Compare the current snapshot against the previous one. When either side
/// is absent there is nothing trustworthy to diff, so the caller redraws.
pub fn detect_changes(
    current: Option<&TelemetrySnapshot>,
    previous: Option<&TelemetrySnapshot>,
    config: &ChangeDetectionConfig,
) -> TelemetryChanges {
    let (current, previous) = match (current, previous) {
        (Some(current), Some(previous)) => (current, previous),
        _ => {
            return TelemetryChanges {
                has_changes: true,
                change_summary: vec!["no snapshot to compare against".to_string()],
                ..Default::default()
            }
        }
    };

    let mut changes = TelemetryChanges::default();

    let lat_delta = (current.latitude - previous.latitude).abs();
    let lon_delta = (current.longitude - previous.longitude).abs();
    if lat_delta > config.position_threshold_degrees || lon_delta > config.position_threshold_degrees
    {
        changes.position_changed = true;
        changes.change_summary.push(format!(
            "position moved {lat_delta:.6}, {lon_delta:.6} degrees"
        ));
    }

    if current.fix_type != previous.fix_type {
        changes.fix_type_changed = true;
        changes.change_summary.push(format!(
            "fix {} -> {}",
            previous.fix_type.display_name(),
            current.fix_type.display_name()
        ));
    }

    if current.satellites_total != previous.satellites_total {
        changes.satellite_count_changed = true;
        changes.change_summary.push(format!(
            "satellites {} -> {}",
            previous.satellites_total, current.satellites_total
        ));
    }

    changes.has_changes =
        changes.position_changed || changes.fix_type_changed || changes.satellite_count_changed;
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntp_panel_shared::FixType;

    fn snapshot(lat: f64, lon: f64, fix: FixType, sats: u8) -> TelemetrySnapshot {
        TelemetrySnapshot {
            latitude: lat,
            longitude: lon,
            fix_type: fix,
            satellites_total: sats,
            data_valid: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_previous_forces_redraw() {
        let current = snapshot(51.0, 4.0, FixType::Fix3D, 8);
        let config = ChangeDetectionConfig::default();

        let changes = detect_changes(Some(&current), None, &config);
        assert!(changes.has_changes);
        assert!(!changes.position_changed);
        assert_eq!(changes.change_summary.len(), 1);

        let changes = detect_changes(None, Some(&current), &config);
        assert!(changes.has_changes);
    }

    #[test]
    fn test_identical_snapshots_report_nothing() {
        let a = snapshot(51.0, 4.0, FixType::Fix3D, 8);
        let b = a.clone();

        let changes = detect_changes(Some(&a), Some(&b), &ChangeDetectionConfig::default());
        assert!(!changes.has_changes);
        assert!(changes.change_summary.is_empty());
    }

    #[test]
    fn test_sub_threshold_drift_is_ignored() {
        let previous = snapshot(51.0, 4.0, FixType::Fix3D, 8);
        let current = snapshot(51.0 + 0.000009, 4.0, FixType::Fix3D, 8);

        let changes = detect_changes(
            Some(&current),
            Some(&previous),
            &ChangeDetectionConfig::default(),
        );
        assert!(!changes.position_changed);
        assert!(!changes.has_changes);
    }

    #[test]
    fn test_position_change_over_threshold() {
        let previous = snapshot(51.0, 4.0, FixType::Fix3D, 8);
        let current = snapshot(51.0, 4.0 + 0.00002, FixType::Fix3D, 8);

        let changes = detect_changes(
            Some(&current),
            Some(&previous),
            &ChangeDetectionConfig::default(),
        );
        assert!(changes.position_changed);
        assert!(changes.has_changes);
    }

    #[test]
    fn test_fix_type_transition() {
        let previous = snapshot(51.0, 4.0, FixType::Fix2D, 8);
        let current = snapshot(51.0, 4.0, FixType::Fix3D, 8);

        let changes = detect_changes(
            Some(&current),
            Some(&previous),
            &ChangeDetectionConfig::default(),
        );
        assert!(changes.fix_type_changed);
        assert!(changes
            .change_summary
            .iter()
            .any(|s| s == "fix 2D Fix -> 3D Fix"));
    }

    #[test]
    fn test_satellite_count_change() {
        let previous = snapshot(51.0, 4.0, FixType::Fix3D, 8);
        let current = snapshot(51.0, 4.0, FixType::Fix3D, 11);

        let changes = detect_changes(
            Some(&current),
            Some(&previous),
            &ChangeDetectionConfig::default(),
        );
        assert!(changes.satellite_count_changed);
        assert!(changes
            .change_summary
            .iter()
            .any(|s| s == "satellites 8 -> 11"));
    }
}
