//! Banner notices for save, reset and load outcomes
//!
//! Pure classification: a request result goes in, the banner the user sees
//! comes out. The HTTP layer succeeding is not enough for a success banner;
//! the body's own `success` flag decides.

use ntp_panel_shared::{AckResponse, PanelError, PanelResult};

use crate::sections::SectionKind;

/// Delay before the page reloads after a factory reset
pub const RELOAD_DELAY_MS: u32 = 3_000;

pub const FACTORY_RESET_CONFIRM: &str =
    "Are you sure you want to reset all settings to factory defaults? This action cannot be undone.";

/// Visual style of the aggregate banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Warning,
}

impl BannerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
            BannerKind::Warning => "warning",
        }
    }
}

/// One banner to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: BannerKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Warning,
            text: text.into(),
        }
    }
}

/// Shown when validation stops a submit
pub fn validation_notice() -> Notice {
    Notice::error("Please correct the highlighted errors before saving")
}

/// Shown while a save request is in flight
pub fn saving_notice() -> Notice {
    Notice::warning("Saving configuration...")
}

/// Classify a completed save request
pub fn save_outcome(result: &PanelResult<AckResponse>) -> Notice {
    match result {
        Ok(ack) if ack.success => Notice::success(ack.message_or("Configuration saved successfully")),
        Ok(ack) => {
            // HTTP succeeded but the device refused; its message wins
            let err = PanelError::Application {
                message: ack.error_or("Failed to save configuration").to_string(),
            };
            err.log();
            Notice::error(err.banner_text())
        }
        Err(err) => {
            err.log();
            Notice::error(err.banner_text())
        }
    }
}

pub fn section_reset_prompt(section: SectionKind) -> String {
    format!("Reset {} settings to default values?", section.label())
}

pub fn section_reset_notice(section: SectionKind) -> Notice {
    Notice::success(format!("{} settings reset to defaults", section.title()))
}

/// Classify a factory reset result; the bool says whether to schedule the
/// page reload
pub fn factory_reset_outcome(result: &PanelResult<AckResponse>) -> (Notice, bool) {
    match result {
        Ok(ack) if ack.success => (
            Notice::success("Factory reset initiated. Device will restart..."),
            true,
        ),
        Ok(ack) => {
            let err = PanelError::Application {
                message: ack.error_or("Factory reset failed").to_string(),
            };
            err.log();
            (Notice::error(err.banner_text()), false)
        }
        Err(err) => {
            err.log();
            (Notice::error(err.banner_text()), false)
        }
    }
}

pub fn load_failure_notice(err: &PanelError) -> Notice {
    Notice::error(format!("Failed to load configuration: {err}"))
}

pub fn status_failure_notice(err: &PanelError) -> Notice {
    Notice::error(format!("Failed to update status: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_flag_governs_save_banner() {
        let accepted = Ok(AckResponse {
            success: true,
            message: Some("Network configuration updated".to_string()),
            error: None,
        });
        let notice = save_outcome(&accepted);
        assert_eq!(notice.kind, BannerKind::Success);
        assert_eq!(notice.text, "Network configuration updated");

        // HTTP 200 but the device said no
        let refused = Ok(AckResponse {
            success: false,
            message: None,
            error: Some("Flash write failed".to_string()),
        });
        let notice = save_outcome(&refused);
        assert_eq!(notice.kind, BannerKind::Error);
        assert_eq!(notice.text, "Flash write failed");
    }

    #[test]
    fn test_save_fallback_texts() {
        let bare_success = Ok(AckResponse {
            success: true,
            message: None,
            error: None,
        });
        assert_eq!(
            save_outcome(&bare_success).text,
            "Configuration saved successfully"
        );

        let bare_failure = Ok(AckResponse {
            success: false,
            message: None,
            error: None,
        });
        assert_eq!(save_outcome(&bare_failure).text, "Failed to save configuration");
    }

    #[test]
    fn test_network_error_banner() {
        let result: PanelResult<AckResponse> = Err(PanelError::Network {
            message: "HTTP 500: Internal Server Error".to_string(),
        });
        let notice = save_outcome(&result);
        assert_eq!(notice.kind, BannerKind::Error);
        assert_eq!(
            notice.text,
            "Network error: HTTP 500: Internal Server Error"
        );
    }

    #[test]
    fn test_factory_reset_reload_only_on_success() {
        let ok = Ok(AckResponse {
            success: true,
            message: None,
            error: None,
        });
        let (notice, reload) = factory_reset_outcome(&ok);
        assert!(reload);
        assert_eq!(notice.text, "Factory reset initiated. Device will restart...");

        let refused = Ok(AckResponse {
            success: false,
            message: None,
            error: None,
        });
        let (notice, reload) = factory_reset_outcome(&refused);
        assert!(!reload);
        assert_eq!(notice.text, "Factory reset failed");
    }

    #[test]
    fn test_section_prompts_and_notices() {
        assert_eq!(
            section_reset_prompt(SectionKind::Network),
            "Reset network settings to default values?"
        );
        assert_eq!(
            section_reset_prompt(SectionKind::Gnss),
            "Reset GNSS settings to default values?"
        );

        let notice = section_reset_notice(SectionKind::Logging);
        assert_eq!(notice.kind, BannerKind::Success);
        assert_eq!(notice.text, "Logging settings reset to defaults");
    }
}
