//! Status endpoint payloads consumed by the configuration dashboard
//!
//! All fields default so older firmware that omits a key still renders a
//! grid instead of a decode error.

use serde::{Deserialize, Serialize};

/// `GET /api/status` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStatus {
    pub gps_fix: bool,
    pub satellites: u32,
    pub network_connected: bool,
    pub ip_address: Option<String>,
    pub uptime_seconds: u64,
    pub free_memory: u64,
}

/// `GET /api/system/metrics` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemMetrics {
    pub ntp_requests: u64,
    pub uptime_seconds: u64,
    /// Bytes
    pub memory_used: u64,
    /// 0-100
    pub health_score: f32,
}

/// Traffic-light classification of the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Ok,
    Warning,
    Error,
}

impl HealthLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            HealthLevel::Ok => "status-ok",
            HealthLevel::Warning => "status-warning",
            HealthLevel::Error => "status-error",
        }
    }
}

impl SystemMetrics {
    pub fn health_level(&self) -> HealthLevel {
        if self.health_score >= 80.0 {
            HealthLevel::Ok
        } else if self.health_score >= 60.0 {
            HealthLevel::Warning
        } else {
            HealthLevel::Error
        }
    }
}

/// One entry of the `GET /api/system/logs` tail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub level: Option<String>,
    pub message: String,
    pub timestamp: Option<u64>,
}

/// `GET /api/system/logs` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemLogs {
    pub logs: Vec<LogEntry>,
}

/// POST acknowledgment body: `{success, message|error}`
///
/// The semantic `success` flag governs the user-facing outcome; a 200 with
/// `success == false` is still a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AckResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl AckResponse {
    /// Success-path text, with a caller-supplied fallback
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }

    /// Failure-path text, with a caller-supplied fallback
    pub fn error_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.error.as_deref().unwrap_or(fallback)
    }
}
