//! Common error type used across all panel crates
//! One enum covers the four failure classes the UI distinguishes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all panel operations
///
/// Every failure ends up in one of four classes, and each class has a fixed
/// surfacing rule: validation errors stay on the form, network and protocol
/// errors become a generic banner, application errors surface the device's
/// own message.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum PanelError {
    // Caught before any network call; never reaches the device
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    // Request failed, timed out, or came back non-2xx
    #[error("Network request failed: {message}")]
    Network { message: String },

    // Response arrived but was empty or not the shape we expect
    #[error("Malformed response: {message}")]
    Protocol { message: String },

    // Device accepted the request but reported failure in the body
    #[error("Device reported failure: {message}")]
    Application { message: String },
}

/// Result type alias for panel operations
pub type PanelResult<T> = Result<T, PanelError>;

impl PanelError {
    /// Log through the facade at a severity matching the failure class
    pub fn log(&self) {
        match self {
            PanelError::Validation { .. } => log::debug!("{self}"),
            PanelError::Network { .. } | PanelError::Protocol { .. } => log::warn!("{self}"),
            PanelError::Application { .. } => log::error!("{self}"),
        }
    }

    /// Text for the transient user-facing banner
    pub fn banner_text(&self) -> String {
        match self {
            PanelError::Validation { .. } => {
                "Please correct the highlighted errors before saving".to_string()
            }
            PanelError::Network { message } => format!("Network error: {message}"),
            PanelError::Protocol { message } => format!("Network error: {message}"),
            PanelError::Application { message } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Protocol {
            message: err.to_string(),
        }
    }
}

impl From<wasm_bindgen::JsValue> for PanelError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}"));
        PanelError::Network { message }
    }
}
