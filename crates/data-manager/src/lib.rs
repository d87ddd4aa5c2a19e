//! Data access for the GPS/NTP panel
//!
//! The fetch client and endpoint wrappers talk to the device's REST API;
//! the poller and change-detection modules are pure state machines the
//! bridge feeds poll results into. Nothing here touches the DOM.

pub mod api;
pub mod changes;
pub mod fetch;
pub mod poller;

pub use api::DeviceApi;
pub use changes::{detect_changes, ChangeDetectionConfig, TelemetryChanges};
pub use fetch::FetchClient;
pub use poller::{
    ConnectionStatus, PollDirective, PollerState, Schedule, FETCH_TIMEOUT_MS,
    MAX_CONNECTION_FAILURES, POLL_INTERVAL_MS, RECONNECT_DELAY_MS, USER_INTERACTION_TIMEOUT_MS,
};
