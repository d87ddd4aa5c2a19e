//! Raw form records and the marshalling between them and wire sections
//!
//! A form struct mirrors the DOM controls of one tab: text and number inputs
//! as strings, checkboxes as bools. `from_config` populates a form from the
//! loaded section; `validate_*` coerces a gathered form back into the typed
//! section or reports per-field errors. Both directions are pure.

use ntp_panel_shared::PackedIp;
use thiserror::Error;

use crate::sections::{GnssConfig, LoggingConfig, NetworkConfig, NtpConfig, SystemConfig};
use crate::validation;

/// One invalid control: the element id and what to tell the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

fn field_error(field: &'static str, message: impl Into<String>) -> FieldError {
    FieldError {
        field,
        message: message.into(),
    }
}

/// Blank for unset, dotted quad otherwise
fn display_ip(ip: PackedIp) -> String {
    if ip.is_unset() {
        String::new()
    } else {
        ip.to_dotted()
    }
}

/// Parse an optional IP field; blank means unset
fn coerce_ip(
    raw: &str,
    field: &'static str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> PackedIp {
    if raw.is_empty() {
        return PackedIp::UNSET;
    }
    if !validation::is_valid_ip(raw) {
        errors.push(field_error(field, message));
        return PackedIp::UNSET;
    }
    // The regex guarantees this parses
    PackedIp::parse(raw).unwrap_or(PackedIp::UNSET)
}

fn finish<T>(
    section: &'static str,
    config: T,
    errors: Vec<FieldError>,
) -> Result<T, Vec<FieldError>> {
    if errors.is_empty() {
        Ok(config)
    } else {
        log::debug!("{section} form rejected: {} field error(s)", errors.len());
        Err(errors)
    }
}

/// Network tab controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkForm {
    pub hostname: String,
    pub use_dhcp: bool,
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
    pub dns_server: String,
}

impl NetworkForm {
    pub fn from_config(config: &NetworkConfig) -> Self {
        Self {
            hostname: config.hostname.clone(),
            use_dhcp: config.uses_dhcp(),
            ip_address: display_ip(config.ip_address),
            netmask: display_ip(config.netmask),
            gateway: display_ip(config.gateway),
            dns_server: display_ip(config.dns_server),
        }
    }
}

/// Validate the network tab. In DHCP mode the address fields are forced to
/// zero no matter what the inputs hold.
pub fn validate_network(form: &NetworkForm) -> Result<NetworkConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    if !validation::is_valid_hostname(&form.hostname) {
        errors.push(field_error(
            "hostname",
            "Hostname must be 1-31 characters, alphanumeric and hyphens only",
        ));
    }

    let (ip_address, netmask, gateway, dns_server) = if form.use_dhcp {
        (
            PackedIp::UNSET,
            PackedIp::UNSET,
            PackedIp::UNSET,
            PackedIp::UNSET,
        )
    } else {
        (
            coerce_ip(
                &form.ip_address,
                "ip_address",
                "Invalid IP address format",
                &mut errors,
            ),
            coerce_ip(
                &form.netmask,
                "netmask",
                "Invalid subnet mask format",
                &mut errors,
            ),
            coerce_ip(
                &form.gateway,
                "gateway",
                "Invalid gateway IP format",
                &mut errors,
            ),
            coerce_ip(
                &form.dns_server,
                "dns_server",
                "Invalid DNS server IP format",
                &mut errors,
            ),
        )
    };

    let config = NetworkConfig {
        hostname: form.hostname.clone(),
        ip_address,
        netmask,
        gateway,
        dns_server,
        mac_address: String::new(),
    };
    finish("network", config, errors)
}

/// GNSS tab controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GnssForm {
    pub gps_enabled: bool,
    pub glonass_enabled: bool,
    pub galileo_enabled: bool,
    pub beidou_enabled: bool,
    pub qzss_enabled: bool,
    pub qzss_l1s_enabled: bool,
    pub gnss_update_rate: String,
    pub disaster_alert_priority: String,
}

impl GnssForm {
    pub fn from_config(config: &GnssConfig) -> Self {
        Self {
            gps_enabled: config.gps_enabled,
            glonass_enabled: config.glonass_enabled,
            galileo_enabled: config.galileo_enabled,
            beidou_enabled: config.beidou_enabled,
            qzss_enabled: config.qzss_enabled,
            qzss_l1s_enabled: config.qzss_l1s_enabled,
            gnss_update_rate: config.gnss_update_rate.to_string(),
            disaster_alert_priority: config.disaster_alert_priority.to_string(),
        }
    }
}

pub fn validate_gnss(form: &GnssForm) -> Result<GnssConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    let gnss_update_rate = validation::parse_update_rate(&form.gnss_update_rate)
        .unwrap_or_else(|message| {
            errors.push(field_error("gnss_update_rate", message));
            0
        });
    let disaster_alert_priority =
        validation::parse_selector(&form.disaster_alert_priority, "alert priority")
            .unwrap_or_else(|message| {
                errors.push(field_error("disaster_alert_priority", message));
                0
            });

    let config = GnssConfig {
        gps_enabled: form.gps_enabled,
        glonass_enabled: form.glonass_enabled,
        galileo_enabled: form.galileo_enabled,
        beidou_enabled: form.beidou_enabled,
        qzss_enabled: form.qzss_enabled,
        qzss_l1s_enabled: form.qzss_l1s_enabled,
        gnss_update_rate,
        disaster_alert_priority,
    };
    finish("GNSS", config, errors)
}

/// NTP tab controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NtpForm {
    pub ntp_enabled: bool,
    pub ntp_port: String,
    pub ntp_stratum: String,
}

impl NtpForm {
    pub fn from_config(config: &NtpConfig) -> Self {
        Self {
            ntp_enabled: config.ntp_enabled,
            ntp_port: config.ntp_port.to_string(),
            ntp_stratum: config.ntp_stratum.to_string(),
        }
    }
}

pub fn validate_ntp(form: &NtpForm) -> Result<NtpConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    let ntp_port = validation::parse_port(&form.ntp_port, "NTP port").unwrap_or_else(|message| {
        errors.push(field_error("ntp_port", message));
        0
    });
    let ntp_stratum =
        validation::parse_selector(&form.ntp_stratum, "stratum").unwrap_or_else(|message| {
            errors.push(field_error("ntp_stratum", message));
            0
        });

    let config = NtpConfig {
        ntp_enabled: form.ntp_enabled,
        ntp_port,
        ntp_stratum,
    };
    finish("NTP", config, errors)
}

/// System tab controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemForm {
    pub auto_restart_enabled: bool,
    pub restart_interval: String,
    pub debug_enabled: bool,
}

impl SystemForm {
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            auto_restart_enabled: config.auto_restart_enabled,
            restart_interval: config.restart_interval.to_string(),
            debug_enabled: config.debug_enabled,
        }
    }
}

pub fn validate_system(form: &SystemForm) -> Result<SystemConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    let restart_interval = validation::parse_restart_interval(&form.restart_interval)
        .unwrap_or_else(|message| {
            errors.push(field_error("restart_interval", message));
            0
        });

    let config = SystemConfig {
        auto_restart_enabled: form.auto_restart_enabled,
        restart_interval,
        debug_enabled: form.debug_enabled,
    };
    finish("system", config, errors)
}

/// Logging tab controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingForm {
    pub syslog_server: String,
    pub syslog_port: String,
    pub log_level: String,
    pub prometheus_enabled: bool,
}

impl LoggingForm {
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self {
            syslog_server: display_ip(config.syslog_server),
            syslog_port: config.syslog_port.to_string(),
            log_level: config.log_level.to_string(),
            prometheus_enabled: config.prometheus_enabled,
        }
    }
}

pub fn validate_logging(form: &LoggingForm) -> Result<LoggingConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    let syslog_server = coerce_ip(
        &form.syslog_server,
        "syslog_server",
        "Invalid IP address format",
        &mut errors,
    );
    let syslog_port =
        validation::parse_port(&form.syslog_port, "syslog port").unwrap_or_else(|message| {
            errors.push(field_error("syslog_port", message));
            0
        });
    let log_level =
        validation::parse_selector(&form.log_level, "log level").unwrap_or_else(|message| {
            errors.push(field_error("log_level", message));
            0
        });

    let config = LoggingConfig {
        syslog_server,
        syslog_port,
        log_level,
        prometheus_enabled: form.prometheus_enabled,
    };
    finish("logging", config, errors)
}
