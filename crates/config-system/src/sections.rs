//! The five configuration sections and their wire shapes
//!
//! Each section maps to one REST path and loads/saves independently. The
//! `Default` impls double as the local reset values.

use ntp_panel_shared::PackedIp;
use serde::{Deserialize, Serialize};

/// One tab of the configuration page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Network,
    Gnss,
    Ntp,
    System,
    Logging,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Network,
        SectionKind::Gnss,
        SectionKind::Ntp,
        SectionKind::System,
        SectionKind::Logging,
    ];

    pub fn endpoint_path(self) -> &'static str {
        match self {
            SectionKind::Network => "/api/config/network",
            SectionKind::Gnss => "/api/config/gnss",
            SectionKind::Ntp => "/api/config/ntp",
            SectionKind::System => "/api/config/system",
            SectionKind::Logging => "/api/config/log",
        }
    }

    /// Capitalized form for notices
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Network => "Network",
            SectionKind::Gnss => "GNSS",
            SectionKind::Ntp => "NTP",
            SectionKind::System => "System",
            SectionKind::Logging => "Logging",
        }
    }

    /// Mid-sentence form for prompts
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Network => "network",
            SectionKind::Gnss => "GNSS",
            SectionKind::Ntp => "NTP",
            SectionKind::System => "system",
            SectionKind::Logging => "logging",
        }
    }
}

/// Hostname and addressing. DHCP is not a wire field; the device signals it
/// with all-zero addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub hostname: String,
    pub ip_address: PackedIp,
    pub netmask: PackedIp,
    pub gateway: PackedIp,
    pub dns_server: PackedIp,
    /// Reported by the device, shown read-only, never submitted
    #[serde(skip_serializing)]
    pub mac_address: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hostname: "gps-ntp-server".to_string(),
            ip_address: PackedIp::UNSET,
            netmask: PackedIp::UNSET,
            gateway: PackedIp::UNSET,
            dns_server: PackedIp::UNSET,
            mac_address: String::new(),
        }
    }
}

impl NetworkConfig {
    pub fn uses_dhcp(&self) -> bool {
        self.ip_address.is_unset()
    }
}

/// Receiver constellation switches and fix cadence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GnssConfig {
    pub gps_enabled: bool,
    pub glonass_enabled: bool,
    pub galileo_enabled: bool,
    pub beidou_enabled: bool,
    pub qzss_enabled: bool,
    /// QZSS L1S disaster/crisis broadcast reception
    pub qzss_l1s_enabled: bool,
    /// Position update rate in Hz
    pub gnss_update_rate: u8,
    /// 0 = low, 1 = medium, 2 = high
    pub disaster_alert_priority: u8,
}

impl Default for GnssConfig {
    fn default() -> Self {
        Self {
            gps_enabled: true,
            glonass_enabled: true,
            galileo_enabled: true,
            beidou_enabled: true,
            qzss_enabled: true,
            qzss_l1s_enabled: true,
            gnss_update_rate: 1,
            disaster_alert_priority: 1,
        }
    }
}

/// NTP service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NtpConfig {
    pub ntp_enabled: bool,
    pub ntp_port: u16,
    pub ntp_stratum: u8,
}

impl Default for NtpConfig {
    fn default() -> Self {
        Self {
            ntp_enabled: true,
            ntp_port: 123,
            ntp_stratum: 1,
        }
    }
}

/// Watchdog and diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub auto_restart_enabled: bool,
    /// Hours between scheduled restarts
    pub restart_interval: u32,
    pub debug_enabled: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            auto_restart_enabled: false,
            restart_interval: 24,
            debug_enabled: false,
        }
    }
}

/// Syslog forwarding and metrics exposure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub syslog_server: PackedIp,
    pub syslog_port: u16,
    /// Syslog severity cutoff 0-7
    pub log_level: u8,
    pub prometheus_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            syslog_server: PackedIp::from_octets(192, 168, 1, 100),
            syslog_port: 514,
            log_level: 6,
            prometheus_enabled: true,
        }
    }
}
