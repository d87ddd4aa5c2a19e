//! Telemetry poll cadence and connection-health state machine
//!
//! The bridge owns the actual timers; this module decides what each poll
//! outcome means. `apply_success` and `apply_failure` return a directive
//! telling the caller whether to redraw and whether to stay on cadence or
//! supersede it with a one-shot reconnect attempt.

use ntp_panel_shared::TelemetrySnapshot;

use crate::changes::{detect_changes, ChangeDetectionConfig, TelemetryChanges};

/// Cadence between telemetry polls
pub const POLL_INTERVAL_MS: u32 = 2_000;

/// Hard deadline on each telemetry request
pub const FETCH_TIMEOUT_MS: u32 = 5_000;

/// Consecutive failures before the poller declares the device unreachable
pub const MAX_CONNECTION_FAILURES: u32 = 5;

/// Delay before the out-of-cadence reconnect attempt
pub const RECONNECT_DELAY_MS: u32 = 1_000;

/// Window after a user interaction during which redraws are suppressed
pub const USER_INTERACTION_TIMEOUT_MS: f64 = 10_000.0;

/// Connection health as shown in the status pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Failing { failures: u32 },
    Reconnecting,
}

impl ConnectionStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Connecting => "Connecting...".to_string(),
            Self::Connected => "Connected".to_string(),
            Self::Failing { failures } => {
                format!("Connection Error ({failures}/{MAX_CONNECTION_FAILURES})")
            }
            Self::Reconnecting => "Reconnecting...".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Failing { .. } => "error",
            Self::Reconnecting => "reconnecting",
        }
    }
}

/// What the bridge should do with its timers after a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Leave the cadence timer running
    KeepCadence,
    /// Cancel the cadence timer and retry once after `delay_ms`, then resume
    SupersedeWithRetry { delay_ms: u32 },
}

/// Outcome of feeding one poll result into the state machine
#[derive(Debug, Clone)]
pub struct PollDirective {
    pub redraw: bool,
    pub changes: Option<TelemetryChanges>,
    pub schedule: Schedule,
}

/// State carried between polls
#[derive(Debug, Clone)]
pub struct PollerState {
    current: Option<TelemetrySnapshot>,
    previous: Option<TelemetrySnapshot>,
    failures: u32,
    status: ConnectionStatus,
    last_interaction_ms: Option<f64>,
    last_applied_ms: Option<f64>,
    config: ChangeDetectionConfig,
}

impl Default for PollerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PollerState {
    pub fn new() -> Self {
        Self {
            current: None,
            previous: None,
            failures: 0,
            status: ConnectionStatus::Connecting,
            last_interaction_ms: None,
            last_applied_ms: None,
            config: ChangeDetectionConfig::default(),
        }
    }

    pub fn current(&self) -> Option<&TelemetrySnapshot> {
        self.current.as_ref()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn last_applied_ms(&self) -> Option<f64> {
        self.last_applied_ms
    }

    /// Record a successful poll. An error-form payload still counts as a
    /// successful round trip: the device answered, it just has no fix.
    pub fn apply_success(&mut self, snapshot: TelemetrySnapshot, now_ms: f64) -> PollDirective {
        if let Some(error) = &snapshot.error {
            log::debug!("device reports: {error}");
        }

        self.previous = self.current.take();
        self.current = Some(snapshot);
        self.failures = 0;
        self.status = ConnectionStatus::Connected;

        let changes = detect_changes(self.current.as_ref(), self.previous.as_ref(), &self.config);
        let redraw = changes.has_changes && !self.is_interacting(now_ms);
        if redraw {
            self.last_applied_ms = Some(now_ms);
        }

        PollDirective {
            redraw,
            changes: Some(changes),
            schedule: Schedule::KeepCadence,
        }
    }

    /// Record a failed poll. On the fifth consecutive failure the cadence
    /// timer is superseded by a single delayed retry.
    pub fn apply_failure(&mut self) -> PollDirective {
        self.failures += 1;

        let schedule = if self.failures >= MAX_CONNECTION_FAILURES {
            log::warn!(
                "telemetry unreachable after {MAX_CONNECTION_FAILURES} attempts, reconnecting"
            );
            self.failures = 0;
            self.status = ConnectionStatus::Reconnecting;
            Schedule::SupersedeWithRetry {
                delay_ms: RECONNECT_DELAY_MS,
            }
        } else {
            self.status = ConnectionStatus::Failing {
                failures: self.failures,
            };
            Schedule::KeepCadence
        };

        PollDirective {
            redraw: false,
            changes: None,
            schedule,
        }
    }

    /// Note a user interaction; redraws are held back for a window after it
    pub fn note_interaction(&mut self, now_ms: f64) {
        self.last_interaction_ms = Some(now_ms);
    }

    pub fn is_interacting(&self, now_ms: f64) -> bool {
        self.last_interaction_ms
            .map(|at| now_ms - at < USER_INTERACTION_TIMEOUT_MS)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_satellites(count: u8) -> TelemetrySnapshot {
        TelemetrySnapshot {
            satellites_total: count,
            data_valid: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_success_redraws() {
        let mut state = PollerState::new();
        let directive = state.apply_success(snapshot_with_satellites(8), 1_000.0);

        assert!(directive.redraw);
        assert_eq!(state.status(), ConnectionStatus::Connected);
        assert_eq!(state.last_applied_ms(), Some(1_000.0));
    }

    #[test]
    fn test_unchanged_snapshot_skips_redraw() {
        let mut state = PollerState::new();
        state.apply_success(snapshot_with_satellites(8), 1_000.0);
        let directive = state.apply_success(snapshot_with_satellites(8), 3_000.0);

        assert!(!directive.redraw);
        assert_eq!(state.last_applied_ms(), Some(1_000.0));
    }

    #[test]
    fn test_interaction_suppresses_redraw_but_state_advances() {
        let mut state = PollerState::new();
        state.apply_success(snapshot_with_satellites(8), 1_000.0);
        state.note_interaction(2_000.0);

        let directive = state.apply_success(snapshot_with_satellites(12), 3_000.0);
        assert!(!directive.redraw);
        assert!(directive.changes.map(|c| c.has_changes).unwrap_or(false));
        assert_eq!(state.current().map(|s| s.satellites_total), Some(12));
    }

    #[test]
    fn test_redraw_resumes_after_interaction_window() {
        let mut state = PollerState::new();
        state.apply_success(snapshot_with_satellites(8), 1_000.0);
        state.note_interaction(2_000.0);

        // 10s window measured from the interaction, not from the last poll
        let directive = state.apply_success(snapshot_with_satellites(12), 12_500.0);
        assert!(directive.redraw);
    }

    #[test]
    fn test_failures_count_up_then_supersede() {
        let mut state = PollerState::new();

        for expected in 1..MAX_CONNECTION_FAILURES {
            let directive = state.apply_failure();
            assert_eq!(directive.schedule, Schedule::KeepCadence);
            assert_eq!(
                state.status(),
                ConnectionStatus::Failing { failures: expected }
            );
        }

        let directive = state.apply_failure();
        assert_eq!(
            directive.schedule,
            Schedule::SupersedeWithRetry {
                delay_ms: RECONNECT_DELAY_MS
            }
        );
        assert_eq!(state.status(), ConnectionStatus::Reconnecting);
        assert_eq!(state.failures(), 0);
    }

    #[test]
    fn test_success_resets_failure_streak() {
        let mut state = PollerState::new();
        state.apply_failure();
        state.apply_failure();

        state.apply_success(snapshot_with_satellites(4), 1_000.0);
        assert_eq!(state.failures(), 0);
        assert_eq!(state.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_error_form_payload_counts_as_success() {
        let mut state = PollerState::new();
        state.apply_failure();

        let snapshot = TelemetrySnapshot {
            error: Some("GPS data not available".to_string()),
            data_valid: false,
            ..Default::default()
        };
        state.apply_success(snapshot, 1_000.0);

        assert_eq!(state.failures(), 0);
        assert_eq!(state.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ConnectionStatus::Connecting.label(), "Connecting...");
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(
            ConnectionStatus::Failing { failures: 3 }.label(),
            "Connection Error (3/5)"
        );
        assert_eq!(ConnectionStatus::Reconnecting.label(), "Reconnecting...");
        assert_eq!(ConnectionStatus::Reconnecting.css_class(), "reconnecting");
    }
}
