//! Integration tests for the poll cycle: decode, diff, schedule.

use ntp_panel_data::{
    detect_changes, ChangeDetectionConfig, ConnectionStatus, PollerState, Schedule,
    MAX_CONNECTION_FAILURES, RECONNECT_DELAY_MS,
};
use ntp_panel_shared::{FixType, TelemetrySnapshot};

fn decode(json: &str) -> TelemetrySnapshot {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_wire_snapshot_feeds_the_poller() {
    let mut state = PollerState::new();

    let snapshot = decode(
        r#"{
            "latitude": 52.372,
            "longitude": 4.9,
            "altitude": 12.5,
            "fix_type": 3,
            "satellites_total": 9,
            "satellites_used": 7,
            "data_valid": true,
            "satellites": [
                {"prn": 5, "constellation": 0, "elevation": 45.0, "azimuth": 120.0,
                 "signal_strength": 38, "used_in_nav": true, "tracked": true}
            ]
        }"#,
    );

    let directive = state.apply_success(snapshot, 0.0);
    assert!(directive.redraw);
    assert_eq!(state.status(), ConnectionStatus::Connected);

    let current = state.current().unwrap();
    assert_eq!(current.fix_type, FixType::Fix3D);
    assert_eq!(current.satellites.len(), 1);
}

#[test]
fn test_error_form_decodes_and_resets_failures() {
    let mut state = PollerState::new();
    state.apply_failure();
    state.apply_failure();
    assert_eq!(state.failures(), 2);

    let snapshot = decode(r#"{"error": "GPS data not available", "data_valid": false}"#);
    assert!(!snapshot.data_valid);
    assert_eq!(snapshot.error.as_deref(), Some("GPS data not available"));

    state.apply_success(snapshot, 1_000.0);
    assert_eq!(state.failures(), 0);
    assert_eq!(state.status(), ConnectionStatus::Connected);
}

#[test]
fn test_fifth_failure_supersedes_the_cadence() {
    let mut state = PollerState::new();

    let mut last = None;
    for _ in 0..MAX_CONNECTION_FAILURES {
        last = Some(state.apply_failure());
    }

    let directive = last.unwrap();
    assert_eq!(
        directive.schedule,
        Schedule::SupersedeWithRetry {
            delay_ms: RECONNECT_DELAY_MS
        }
    );
    assert_eq!(state.status(), ConnectionStatus::Reconnecting);

    // The streak restarts after the supersede, so the next failure is 1/5
    let directive = state.apply_failure();
    assert_eq!(directive.schedule, Schedule::KeepCadence);
    assert_eq!(state.status(), ConnectionStatus::Failing { failures: 1 });
}

#[test]
fn test_interaction_window_holds_back_redraws() {
    let mut state = PollerState::new();

    let first = decode(r#"{"satellites_total": 6, "data_valid": true}"#);
    state.apply_success(first, 0.0);

    state.note_interaction(1_000.0);

    let second = decode(r#"{"satellites_total": 9, "data_valid": true}"#);
    let directive = state.apply_success(second, 3_000.0);
    assert!(!directive.redraw);
    assert_eq!(state.current().map(|s| s.satellites_total), Some(9));

    // Just inside the window
    let third = decode(r#"{"satellites_total": 12, "data_valid": true}"#);
    let directive = state.apply_success(third, 10_999.0);
    assert!(!directive.redraw);

    // Past the window the next change repaints
    let fourth = decode(r#"{"satellites_total": 14, "data_valid": true}"#);
    let directive = state.apply_success(fourth, 11_100.0);
    assert!(directive.redraw);
}

#[test]
fn test_change_detection_truth_table() {
    let config = ChangeDetectionConfig::default();
    let base = decode(r#"{"latitude": 51.0, "longitude": 4.0, "fix_type": 3,
                          "satellites_total": 8, "data_valid": true}"#);

    // Absent previous snapshot
    let changes = detect_changes(Some(&base), None, &config);
    assert!(changes.has_changes);

    // Identical
    let same = base.clone();
    let changes = detect_changes(Some(&same), Some(&base), &config);
    assert!(!changes.has_changes);

    // Position drift under the threshold
    let mut drifted = base.clone();
    drifted.latitude += 0.000005;
    let changes = detect_changes(Some(&drifted), Some(&base), &config);
    assert!(!changes.has_changes);

    // Position over the threshold
    let mut moved = base.clone();
    moved.longitude += 0.0001;
    let changes = detect_changes(Some(&moved), Some(&base), &config);
    assert!(changes.has_changes && changes.position_changed);

    // Fix downgrade
    let mut downgraded = base.clone();
    downgraded.fix_type = FixType::Fix2D;
    let changes = detect_changes(Some(&downgraded), Some(&base), &config);
    assert!(changes.has_changes && changes.fix_type_changed);

    // Satellite count
    let mut fewer = base.clone();
    fewer.satellites_total = 5;
    let changes = detect_changes(Some(&fewer), Some(&base), &config);
    assert!(changes.has_changes && changes.satellite_count_changed);
}
