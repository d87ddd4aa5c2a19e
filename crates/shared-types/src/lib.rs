//! Shared types for the GPS/NTP panel architecture
//!
//! This crate contains all types that are shared between the data-manager,
//! renderer, config-system, and wasm-bridge crates: the wire records the
//! device's REST API speaks, the enums the UI renders from, and the common
//! error type. Everything here is host-independent and testable natively.

pub mod errors;
pub mod format;
pub mod net;
pub mod status;
pub mod telemetry;

pub use errors::{PanelError, PanelResult};
pub use net::PackedIp;
pub use status::{AckResponse, DeviceStatus, LogEntry, SystemLogs, SystemMetrics};
pub use telemetry::{
    Constellation, ConstellationCounts, ConstellationEnables, ConstellationStats, FixType,
    SatelliteEntry, TelemetrySnapshot,
};
