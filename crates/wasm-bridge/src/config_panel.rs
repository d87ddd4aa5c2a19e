//! The configuration page: five settings forms, factory reset, status grid.
//!
//! `ConfigPanel` loads every section in parallel on init, validates and saves
//! sections on demand, and refreshes the status summary every 30 s. All
//! validation is client-side first; a section only goes on the wire once its
//! typed record has been built.

use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use ntp_panel_config::{
    factory_reset_outcome, load_failure_notice, save_outcome, saving_notice,
    section_reset_notice, section_reset_prompt, status_failure_notice, validate_gnss,
    validate_logging, validate_network, validate_ntp, validate_system, validation_notice,
    FieldError, GnssConfig, GnssForm, LoggingConfig, LoggingForm, NetworkConfig, NetworkForm,
    NtpConfig, NtpForm, SectionKind, SystemConfig, SystemForm, FACTORY_RESET_CONFIRM,
    RELOAD_DELAY_MS,
};
use ntp_panel_data::DeviceApi;

use crate::dom;
use crate::instance_manager::{PanelInstance, Panels};
use crate::markup;
use crate::timers::{self, IntervalHandle};

/// Status summary refresh period
const STATUS_REFRESH_MS: u32 = 30_000;

#[wasm_bindgen]
pub struct ConfigPanel {
    instance_id: Uuid,
}

#[wasm_bindgen]
impl ConfigPanel {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ConfigPanel {
        ConfigPanel {
            instance_id: Uuid::new_v4(),
        }
    }

    /// Registers the instance and loads all five config sections into the
    /// forms. Population is all-or-nothing: one failed fetch leaves every
    /// form untouched and shows a banner instead.
    pub fn init(&self, base_url: &str) -> Result<(), JsValue> {
        Panels::insert(self.instance_id, PanelInstance::new(base_url));
        let instance_id = self.instance_id;
        spawn_local(async move {
            load_all_sections(instance_id).await;
        });
        Ok(())
    }

    /// Validates one section and saves it to the device. `section` is the
    /// section name used in the page markup ("network", "gnss", "ntp",
    /// "system", "logging").
    pub fn submit_section(&self, section: &str) -> Result<(), JsValue> {
        let kind = section_from_name(section)?;
        dom::clear_field_errors()?;

        let validated: Result<serde_json::Value, Vec<FieldError>> = match kind {
            SectionKind::Network => validate_network(&read_network_form()?).map(to_value),
            SectionKind::Gnss => validate_gnss(&read_gnss_form()?).map(to_value),
            SectionKind::Ntp => validate_ntp(&read_ntp_form()?).map(to_value),
            SectionKind::System => validate_system(&read_system_form()?).map(to_value),
            SectionKind::Logging => validate_logging(&read_logging_form()?).map(to_value),
        };

        let payload = match validated {
            Ok(payload) => payload,
            Err(errors) => {
                for error in &errors {
                    if let Err(err) = dom::mark_field_error(error.field, &error.message) {
                        log::debug!("could not mark field {}: {err:?}", error.field);
                    }
                }
                dom::show_banner(&validation_notice());
                return Ok(());
            }
        };

        log::debug!("submitting {} config: {payload}", kind.label());

        let api = panel_api(&self.instance_id)?;
        let path = kind.endpoint_path();
        dom::show_loading();
        dom::show_banner(&saving_notice());
        spawn_local(async move {
            let result = api.save_config(path, &payload).await;
            dom::hide_loading();
            dom::show_banner(&save_outcome(&result));
        });
        Ok(())
    }

    /// Restores one section's form to firmware defaults after confirmation.
    /// Local only; nothing reaches the device until the user saves.
    pub fn reset_section(&self, section: &str) -> Result<(), JsValue> {
        let kind = section_from_name(section)?;
        if !dom::confirm(&section_reset_prompt(kind)) {
            return Ok(());
        }

        match kind {
            // The MAC readout is device identity, not a setting; reset
            // leaves it alone.
            SectionKind::Network => populate_network(&NetworkConfig::default())?,
            SectionKind::Gnss => populate_gnss(&GnssConfig::default())?,
            SectionKind::Ntp => populate_ntp(&NtpConfig::default())?,
            SectionKind::System => populate_system(&SystemConfig::default())?,
            SectionKind::Logging => populate_logging(&LoggingConfig::default())?,
        }
        dom::clear_field_errors()?;
        dom::show_banner(&section_reset_notice(kind));
        Ok(())
    }

    /// Confirmation-gated factory reset. On success the page reloads once
    /// the device has had time to restart.
    pub fn factory_reset(&self) -> Result<(), JsValue> {
        if !dom::confirm(FACTORY_RESET_CONFIRM) {
            return Ok(());
        }

        let api = panel_api(&self.instance_id)?;
        dom::show_loading();
        spawn_local(async move {
            let result = api.factory_reset().await;
            dom::hide_loading();
            let (notice, reload) = factory_reset_outcome(&result);
            dom::show_banner(&notice);
            if reload {
                let scheduled = timers::one_shot(RELOAD_DELAY_MS, || {
                    if let Ok(window) = timers::window() {
                        let _ = window.location().reload();
                    }
                });
                if let Err(err) = scheduled {
                    log::warn!("failed to schedule reload: {err:?}");
                }
            }
        });
        Ok(())
    }

    /// Shows or hides the static IP fields based on the DHCP checkbox.
    /// Wire this to the checkbox's change event.
    pub fn toggle_static_fields(&self) -> Result<(), JsValue> {
        let use_dhcp = dom::checkbox_checked("use_dhcp")?;
        set_static_group_visible(!use_dhcp)
    }

    /// Begins the 30 s status summary refresh with an immediate first fetch.
    pub fn start_status_updates(&self) -> Result<(), JsValue> {
        let instance_id = self.instance_id;
        spawn_status_refresh(instance_id);
        let handle = IntervalHandle::repeating(STATUS_REFRESH_MS, move || {
            spawn_status_refresh(instance_id);
        })?;
        Panels::with_mut(&self.instance_id, |inst| inst.status_timer = Some(handle))
            .ok_or_else(|| JsValue::from_str("Config panel instance not found"))?;
        Ok(())
    }

    /// Stops the status refresh and releases the instance. Call on unload.
    pub fn destroy(&self) {
        if Panels::remove(&self.instance_id).is_some() {
            log::info!("config panel {} destroyed", self.instance_id);
        }
    }
}

fn panel_api(instance_id: &Uuid) -> Result<DeviceApi, JsValue> {
    Panels::with(instance_id, |inst| inst.api.clone())
        .ok_or_else(|| JsValue::from_str("Config panel instance not found"))
}

fn section_from_name(name: &str) -> Result<SectionKind, JsValue> {
    SectionKind::ALL
        .into_iter()
        .find(|kind| kind.label().eq_ignore_ascii_case(name))
        .ok_or_else(|| JsValue::from_str(&format!("unknown config section: {name}")))
}

fn to_value<T: serde::Serialize>(config: T) -> serde_json::Value {
    serde_json::to_value(config).unwrap_or(serde_json::Value::Null)
}

async fn load_all_sections(instance_id: Uuid) {
    let Some(api) = Panels::with(&instance_id, |inst| inst.api.clone()) else {
        return;
    };

    let loaded = futures::join!(
        api.load_config::<NetworkConfig>(SectionKind::Network.endpoint_path()),
        api.load_config::<GnssConfig>(SectionKind::Gnss.endpoint_path()),
        api.load_config::<NtpConfig>(SectionKind::Ntp.endpoint_path()),
        api.load_config::<SystemConfig>(SectionKind::System.endpoint_path()),
        api.load_config::<LoggingConfig>(SectionKind::Logging.endpoint_path()),
    );

    let (network, gnss, ntp, system, logging) = match loaded {
        (Ok(network), Ok(gnss), Ok(ntp), Ok(system), Ok(logging)) => {
            (network, gnss, ntp, system, logging)
        }
        (network, gnss, ntp, system, logging) => {
            let first_error = [
                network.err(),
                gnss.err(),
                ntp.err(),
                system.err(),
                logging.err(),
            ]
            .into_iter()
            .flatten()
            .next();
            if let Some(err) = first_error {
                err.log();
                dom::show_banner(&load_failure_notice(&err));
            }
            return;
        }
    };

    let populated = populate_network(&network)
        .and_then(|()| set_mac_display(&network))
        .and_then(|()| populate_gnss(&gnss))
        .and_then(|()| populate_ntp(&ntp))
        .and_then(|()| populate_system(&system))
        .and_then(|()| populate_logging(&logging));
    if let Err(err) = populated {
        log::warn!("form population failed: {err:?}");
    }
}

fn spawn_status_refresh(instance_id: Uuid) {
    spawn_local(async move {
        let Some(api) = Panels::with(&instance_id, |inst| inst.api.clone()) else {
            return;
        };
        let results = futures::future::join3(api.status(), api.metrics(), api.logs()).await;

        match results {
            (Ok(status), Ok(metrics), Ok(logs)) => {
                let grid = markup::status_grid_html(&status, &metrics);
                if let Err(err) = dom::set_inner_html("statusGrid", &grid) {
                    log::debug!("status grid unavailable: {err:?}");
                }
                // Optional region; older page layouts do not have it.
                if let Some(element) = dom::try_element("recentLogs") {
                    element.set_inner_html(&markup::recent_logs_html(&logs));
                }
            }
            (status, metrics, logs) => {
                let first_error = [status.err(), metrics.err(), logs.err()]
                    .into_iter()
                    .flatten()
                    .next();
                if let Some(err) = first_error {
                    err.log();
                    dom::show_banner(&status_failure_notice(&err));
                }
            }
        }
    });
}

fn set_static_group_visible(visible: bool) -> Result<(), JsValue> {
    dom::set_display("staticIpGroup", if visible { "block" } else { "none" })
}

fn populate_network(config: &NetworkConfig) -> Result<(), JsValue> {
    let form = NetworkForm::from_config(config);
    dom::set_input_value("hostname", &form.hostname)?;
    dom::set_checkbox("use_dhcp", form.use_dhcp)?;
    dom::set_input_value("ip_address", &form.ip_address)?;
    dom::set_input_value("netmask", &form.netmask)?;
    dom::set_input_value("gateway", &form.gateway)?;
    dom::set_input_value("dns_server", &form.dns_server)?;
    set_static_group_visible(!form.use_dhcp)
}

fn set_mac_display(config: &NetworkConfig) -> Result<(), JsValue> {
    let mac = if config.mac_address.is_empty() {
        "Unknown"
    } else {
        &config.mac_address
    };
    dom::set_text("mac_address", mac)
}

fn populate_gnss(config: &GnssConfig) -> Result<(), JsValue> {
    let form = GnssForm::from_config(config);
    dom::set_checkbox("gps_enabled", form.gps_enabled)?;
    dom::set_checkbox("glonass_enabled", form.glonass_enabled)?;
    dom::set_checkbox("galileo_enabled", form.galileo_enabled)?;
    dom::set_checkbox("beidou_enabled", form.beidou_enabled)?;
    dom::set_checkbox("qzss_enabled", form.qzss_enabled)?;
    dom::set_checkbox("qzss_l1s_enabled", form.qzss_l1s_enabled)?;
    dom::set_input_value("gnss_update_rate", &form.gnss_update_rate)?;
    dom::sync_dropdown("disaster_alert_priority", &form.disaster_alert_priority)
}

fn populate_ntp(config: &NtpConfig) -> Result<(), JsValue> {
    let form = NtpForm::from_config(config);
    dom::set_checkbox("ntp_enabled", form.ntp_enabled)?;
    dom::set_input_value("ntp_port", &form.ntp_port)?;
    dom::sync_dropdown("ntp_stratum", &form.ntp_stratum)
}

fn populate_system(config: &SystemConfig) -> Result<(), JsValue> {
    let form = SystemForm::from_config(config);
    dom::set_checkbox("auto_restart_enabled", form.auto_restart_enabled)?;
    dom::set_input_value("restart_interval", &form.restart_interval)?;
    dom::set_checkbox("debug_enabled", form.debug_enabled)
}

fn populate_logging(config: &LoggingConfig) -> Result<(), JsValue> {
    let form = LoggingForm::from_config(config);
    dom::set_input_value("syslog_server", &form.syslog_server)?;
    dom::set_input_value("syslog_port", &form.syslog_port)?;
    dom::sync_dropdown("log_level", &form.log_level)?;
    dom::set_checkbox("prometheus_enabled", form.prometheus_enabled)
}

fn read_network_form() -> Result<NetworkForm, JsValue> {
    Ok(NetworkForm {
        hostname: dom::input_value("hostname")?,
        use_dhcp: dom::checkbox_checked("use_dhcp")?,
        ip_address: dom::input_value("ip_address")?,
        netmask: dom::input_value("netmask")?,
        gateway: dom::input_value("gateway")?,
        dns_server: dom::input_value("dns_server")?,
    })
}

fn read_gnss_form() -> Result<GnssForm, JsValue> {
    Ok(GnssForm {
        gps_enabled: dom::checkbox_checked("gps_enabled")?,
        glonass_enabled: dom::checkbox_checked("glonass_enabled")?,
        galileo_enabled: dom::checkbox_checked("galileo_enabled")?,
        beidou_enabled: dom::checkbox_checked("beidou_enabled")?,
        qzss_enabled: dom::checkbox_checked("qzss_enabled")?,
        qzss_l1s_enabled: dom::checkbox_checked("qzss_l1s_enabled")?,
        gnss_update_rate: dom::input_value("gnss_update_rate")?,
        disaster_alert_priority: dom::input_value("disaster_alert_priority")?,
    })
}

fn read_ntp_form() -> Result<NtpForm, JsValue> {
    Ok(NtpForm {
        ntp_enabled: dom::checkbox_checked("ntp_enabled")?,
        ntp_port: dom::input_value("ntp_port")?,
        ntp_stratum: dom::input_value("ntp_stratum")?,
    })
}

fn read_system_form() -> Result<SystemForm, JsValue> {
    Ok(SystemForm {
        auto_restart_enabled: dom::checkbox_checked("auto_restart_enabled")?,
        restart_interval: dom::input_value("restart_interval")?,
        debug_enabled: dom::checkbox_checked("debug_enabled")?,
    })
}

fn read_logging_form() -> Result<LoggingForm, JsValue> {
    Ok(LoggingForm {
        syslog_server: dom::input_value("syslog_server")?,
        syslog_port: dom::input_value("syslog_port")?,
        log_level: dom::input_value("log_level")?,
        prometheus_enabled: dom::checkbox_checked("prometheus_enabled")?,
    })
}
