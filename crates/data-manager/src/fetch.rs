//! Browser fetch client with a hard per-request deadline
//!
//! Every request carries an AbortController whose abort fires from a timeout
//! promise raced against the fetch itself, so a wedged device cannot hold a
//! poll open past the deadline.

use ntp_panel_shared::{PanelError, PanelResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

/// HTTP client over the browser's fetch API
#[derive(Debug, Clone)]
pub struct FetchClient {
    timeout_ms: u32,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self { timeout_ms: 5_000 }
    }
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    /// GET a JSON document and decode it
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> PanelResult<T> {
        let body = self.request_text(url, "GET", None).await?;
        decode_body(&body)
    }

    /// POST a JSON body and decode the JSON acknowledgment
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> PanelResult<T> {
        let payload = serde_json::to_string(body)?;
        let text = self.request_text(url, "POST", Some(payload)).await?;
        decode_body(&text)
    }

    /// POST with an empty body (the factory-reset endpoint takes none)
    pub async fn post_empty<T: DeserializeOwned>(&self, url: &str) -> PanelResult<T> {
        let text = self.request_text(url, "POST", None).await?;
        decode_body(&text)
    }

    async fn request_text(
        &self,
        url: &str,
        method: &str,
        body: Option<String>,
    ) -> PanelResult<String> {
        let opts = RequestInit::new();
        opts.set_method(method);

        let abort_controller = AbortController::new()?;
        let signal = abort_controller.signal();
        opts.set_signal(Some(&signal));

        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;
        headers.set("Cache-Control", "no-cache")?;
        if body.is_some() {
            headers.set("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| PanelError::Network {
            message: "no window object available".to_string(),
        })?;

        // Timeout promise that aborts the in-flight request when it fires
        let timeout_ms = self.timeout_ms;
        let timeout_promise = js_sys::Promise::new(&mut |_, reject| {
            let abort_controller = abort_controller.clone();
            let timeout_closure = Closure::once(Box::new(move || {
                abort_controller.abort();
                let _ = reject.call1(&JsValue::null(), &JsValue::from_str("request timeout"));
            }) as Box<dyn FnOnce()>);

            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    timeout_closure.as_ref().unchecked_ref(),
                    timeout_ms as i32,
                );
            }
            timeout_closure.forget();
        });

        let fetch_promise = window.fetch_with_request(&request);
        let winner = js_sys::Promise::race(&js_sys::Array::of2(&fetch_promise, &timeout_promise));

        let resp_value = JsFuture::from(winner).await?;
        let resp: Response = resp_value.dyn_into().map_err(|_| PanelError::Protocol {
            message: "fetch did not yield a Response".to_string(),
        })?;

        if !resp.ok() {
            return Err(PanelError::Network {
                message: format!("HTTP {}: {}", resp.status(), resp.status_text()),
            });
        }

        let text_value = JsFuture::from(resp.text()?).await?;
        Ok(text_value.as_string().unwrap_or_default())
    }
}

/// Decode a response body; empty bodies count as malformed
fn decode_body<T: DeserializeOwned>(body: &str) -> PanelResult<T> {
    if body.trim().is_empty() {
        return Err(PanelError::Protocol {
            message: "empty response body".to_string(),
        });
    }
    serde_json::from_str(body).map_err(PanelError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_empty_body() {
        let result: PanelResult<serde_json::Value> = decode_body("");
        assert!(matches!(result, Err(PanelError::Protocol { .. })));

        let result: PanelResult<serde_json::Value> = decode_body("   \n");
        assert!(matches!(result, Err(PanelError::Protocol { .. })));
    }

    #[test]
    fn test_decode_rejects_truncated_json() {
        let result: PanelResult<serde_json::Value> = decode_body("{\"data_valid\": tr");
        assert!(matches!(result, Err(PanelError::Protocol { .. })));
    }

    #[test]
    fn test_decode_accepts_valid_json() {
        let value: serde_json::Value = decode_body("{\"data_valid\": true}").unwrap();
        assert_eq!(value["data_valid"], serde_json::json!(true));
    }
}
