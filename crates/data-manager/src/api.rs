//! Typed wrappers over the device's HTTP endpoints

use ntp_panel_shared::{
    AckResponse, DeviceStatus, PanelResult, SystemLogs, SystemMetrics, TelemetrySnapshot,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::fetch::FetchClient;
use crate::poller;

pub const GPS_ENDPOINT: &str = "/api/gps";
pub const STATUS_ENDPOINT: &str = "/api/status";
pub const METRICS_ENDPOINT: &str = "/api/system/metrics";
pub const LOGS_ENDPOINT: &str = "/api/system/logs";
pub const RESET_ENDPOINT: &str = "/api/reset";

/// Client for the appliance's REST surface. Configuration endpoints are
/// addressed by path so this crate stays independent of the form layer.
#[derive(Debug, Clone)]
pub struct DeviceApi {
    client: FetchClient,
    base_url: String,
}

impl DeviceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::with_timeout(poller::FETCH_TIMEOUT_MS),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn telemetry(&self) -> PanelResult<TelemetrySnapshot> {
        self.client.fetch_json(&self.url(GPS_ENDPOINT)).await
    }

    pub async fn status(&self) -> PanelResult<DeviceStatus> {
        self.client.fetch_json(&self.url(STATUS_ENDPOINT)).await
    }

    pub async fn metrics(&self) -> PanelResult<SystemMetrics> {
        self.client.fetch_json(&self.url(METRICS_ENDPOINT)).await
    }

    pub async fn logs(&self) -> PanelResult<SystemLogs> {
        self.client.fetch_json(&self.url(LOGS_ENDPOINT)).await
    }

    pub async fn load_config<T: DeserializeOwned>(&self, path: &str) -> PanelResult<T> {
        self.client.fetch_json(&self.url(path)).await
    }

    pub async fn save_config<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> PanelResult<AckResponse> {
        self.client.post_json(&self.url(path), body).await
    }

    pub async fn factory_reset(&self) -> PanelResult<AckResponse> {
        self.client.post_empty(&self.url(RESET_ENDPOINT)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_concatenate_base_and_path() {
        let api = DeviceApi::new("http://192.168.1.42");
        assert_eq!(api.url(GPS_ENDPOINT), "http://192.168.1.42/api/gps");
        assert_eq!(api.url(RESET_ENDPOINT), "http://192.168.1.42/api/reset");
    }
}
