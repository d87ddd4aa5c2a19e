//! Telemetry wire types for the `/api/gps` endpoint
//!
//! The device replies with either a full fix summary or the reduced
//! `{error, data_valid: false}` form. Both deserialize into
//! [`TelemetrySnapshot`]: every field defaults, so a reduced body parses to
//! an all-zero snapshot with `data_valid == false` instead of failing.

use serde::{Deserialize, Serialize};

/// Positioning mode reported by the receiver; crosses the wire as a u8 index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum FixType {
    #[default]
    NoFix,
    DeadReckoning,
    Fix2D,
    Fix3D,
    GnssDeadReckoning,
    TimeOnly,
    Unknown,
}

impl From<u8> for FixType {
    fn from(value: u8) -> Self {
        match value {
            0 => FixType::NoFix,
            1 => FixType::DeadReckoning,
            2 => FixType::Fix2D,
            3 => FixType::Fix3D,
            4 => FixType::GnssDeadReckoning,
            5 => FixType::TimeOnly,
            _ => FixType::Unknown,
        }
    }
}

impl From<FixType> for u8 {
    fn from(value: FixType) -> Self {
        match value {
            FixType::NoFix => 0,
            FixType::DeadReckoning => 1,
            FixType::Fix2D => 2,
            FixType::Fix3D => 3,
            FixType::GnssDeadReckoning => 4,
            FixType::TimeOnly => 5,
            FixType::Unknown => 255,
        }
    }
}

impl FixType {
    pub fn display_name(self) -> &'static str {
        match self {
            FixType::NoFix => "No Fix",
            FixType::DeadReckoning => "Dead Reckoning",
            FixType::Fix2D => "2D Fix",
            FixType::Fix3D => "3D Fix",
            FixType::GnssDeadReckoning => "GNSS + DR",
            FixType::TimeOnly => "Time Only",
            FixType::Unknown => "Unknown",
        }
    }

    /// True for modes carrying a usable position solution
    pub fn has_position(self) -> bool {
        matches!(
            self,
            FixType::Fix2D | FixType::Fix3D | FixType::GnssDeadReckoning
        )
    }
}

/// Satellite navigation system; crosses the wire as a u8 index
///
/// Unknown indices fall back to GPS, matching the dashboard's behaviour of
/// never dropping a satellite on the floor over a bad tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Constellation {
    #[default]
    Gps,
    Sbas,
    Galileo,
    Beidou,
    Glonass,
    Qzss,
}

impl From<u8> for Constellation {
    fn from(value: u8) -> Self {
        match value {
            0 => Constellation::Gps,
            1 => Constellation::Sbas,
            2 => Constellation::Galileo,
            3 => Constellation::Beidou,
            4 => Constellation::Glonass,
            5 => Constellation::Qzss,
            _ => Constellation::Gps,
        }
    }
}

impl From<Constellation> for u8 {
    fn from(value: Constellation) -> Self {
        match value {
            Constellation::Gps => 0,
            Constellation::Sbas => 1,
            Constellation::Galileo => 2,
            Constellation::Beidou => 3,
            Constellation::Glonass => 4,
            Constellation::Qzss => 5,
        }
    }
}

impl Constellation {
    /// Wire index order
    pub const ALL: [Constellation; 6] = [
        Constellation::Gps,
        Constellation::Sbas,
        Constellation::Galileo,
        Constellation::Beidou,
        Constellation::Glonass,
        Constellation::Qzss,
    ];

    /// Order the summary cards render in
    pub const SUMMARY_ORDER: [Constellation; 6] = [
        Constellation::Gps,
        Constellation::Glonass,
        Constellation::Galileo,
        Constellation::Beidou,
        Constellation::Sbas,
        Constellation::Qzss,
    ];

    /// Fixed display color, shared by radar markers and summary cards
    pub fn color(self) -> &'static str {
        match self {
            Constellation::Gps => "#f39c12",
            Constellation::Sbas => "#95a5a6",
            Constellation::Galileo => "#27ae60",
            Constellation::Beidou => "#3498db",
            Constellation::Glonass => "#e74c3c",
            Constellation::Qzss => "#9b59b6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Constellation::Gps => "GPS",
            Constellation::Sbas => "SBAS",
            Constellation::Galileo => "Galileo",
            Constellation::Beidou => "BeiDou",
            Constellation::Glonass => "GLONASS",
            Constellation::Qzss => "QZSS",
        }
    }

    /// Lowercase key used in the stats and enables wire blocks
    pub fn from_key(key: &str) -> Option<Constellation> {
        Constellation::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Constellation::Gps => "gps",
            Constellation::Sbas => "sbas",
            Constellation::Galileo => "galileo",
            Constellation::Beidou => "beidou",
            Constellation::Glonass => "glonass",
            Constellation::Qzss => "qzss",
        }
    }
}

/// One satellite the receiver is watching; regenerated every poll
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteEntry {
    pub prn: u8,
    pub constellation: Constellation,
    /// Degrees above the horizon, 0-90
    pub elevation: f32,
    /// Degrees clockwise from north, 0-360
    pub azimuth: f32,
    /// C/N0 in dB-Hz
    pub signal_strength: u8,
    pub used_in_nav: bool,
    pub tracked: bool,
}

/// Used/total pair for one constellation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationCounts {
    pub total: u8,
    pub used: u8,
}

/// Per-constellation counts block as the device sends it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationStats {
    pub satellites_total: u8,
    pub satellites_used: u8,
    pub gps: ConstellationCounts,
    pub sbas: ConstellationCounts,
    pub galileo: ConstellationCounts,
    pub beidou: ConstellationCounts,
    pub glonass: ConstellationCounts,
    pub qzss: ConstellationCounts,
}

impl ConstellationStats {
    pub fn counts(&self, constellation: Constellation) -> ConstellationCounts {
        match constellation {
            Constellation::Gps => self.gps,
            Constellation::Sbas => self.sbas,
            Constellation::Galileo => self.galileo,
            Constellation::Beidou => self.beidou,
            Constellation::Glonass => self.glonass,
            Constellation::Qzss => self.qzss,
        }
    }

    /// Recompute the block from the satellite array, for devices that omit it
    pub fn from_satellites(satellites: &[SatelliteEntry]) -> Self {
        let mut stats = ConstellationStats::default();
        for sat in satellites {
            let counts = match sat.constellation {
                Constellation::Gps => &mut stats.gps,
                Constellation::Sbas => &mut stats.sbas,
                Constellation::Galileo => &mut stats.galileo,
                Constellation::Beidou => &mut stats.beidou,
                Constellation::Glonass => &mut stats.glonass,
                Constellation::Qzss => &mut stats.qzss,
            };
            counts.total = counts.total.saturating_add(1);
            stats.satellites_total = stats.satellites_total.saturating_add(1);
            if sat.used_in_nav {
                counts.used = counts.used.saturating_add(1);
                stats.satellites_used = stats.satellites_used.saturating_add(1);
            }
        }
        stats
    }
}

/// Which constellations the receiver itself is configured to track
///
/// Missing keys mean enabled; the device only started sending this block in
/// later firmware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationEnables {
    pub gps: bool,
    pub sbas: bool,
    pub galileo: bool,
    pub beidou: bool,
    pub glonass: bool,
    pub qzss: bool,
}

impl Default for ConstellationEnables {
    fn default() -> Self {
        Self {
            gps: true,
            sbas: true,
            galileo: true,
            beidou: true,
            glonass: true,
            qzss: true,
        }
    }
}

impl ConstellationEnables {
    pub fn is_enabled(&self, constellation: Constellation) -> bool {
        match constellation {
            Constellation::Gps => self.gps,
            Constellation::Sbas => self.sbas,
            Constellation::Galileo => self.galileo,
            Constellation::Beidou => self.beidou,
            Constellation::Glonass => self.glonass,
            Constellation::Qzss => self.qzss,
        }
    }

    pub fn set_enabled(&mut self, constellation: Constellation, enabled: bool) {
        match constellation {
            Constellation::Gps => self.gps = enabled,
            Constellation::Sbas => self.sbas = enabled,
            Constellation::Galileo => self.galileo = enabled,
            Constellation::Beidou => self.beidou = enabled,
            Constellation::Glonass => self.glonass = enabled,
            Constellation::Qzss => self.qzss = enabled,
        }
    }
}

/// Full fix summary polled from `/api/gps`
///
/// Replaced wholesale on each successful poll; the previous snapshot is kept
/// only for change comparison, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySnapshot {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level
    pub altitude: f32,
    /// Meters per second
    pub speed: f32,
    /// Degrees true
    pub course: f32,
    /// Unix seconds
    pub utc_time: u32,
    /// Seconds from cold start to first fix
    pub ttff: u32,
    pub fix_type: FixType,
    pub pdop: f32,
    pub hdop: f32,
    pub vdop: f32,
    pub accuracy_2d: f32,
    pub accuracy_3d: f32,
    pub satellites_total: u8,
    pub satellites_used: u8,
    pub data_valid: bool,
    pub satellites: Vec<SatelliteEntry>,
    pub constellation_stats: Option<ConstellationStats>,
    pub constellation_enables: Option<ConstellationEnables>,
    /// Set by the device on its `{error, data_valid: false}` reply
    pub error: Option<String>,
}

impl TelemetrySnapshot {
    /// The device's stats block, or one recomputed from the satellite array
    ///
    /// When recomputing, the top-level totals win over the array length: the
    /// array is capped at the receiver's channel count, the totals are not.
    pub fn stats(&self) -> ConstellationStats {
        match &self.constellation_stats {
            Some(stats) => stats.clone(),
            None => {
                let mut stats = ConstellationStats::from_satellites(&self.satellites);
                stats.satellites_total = self.satellites_total;
                stats.satellites_used = self.satellites_used;
                stats
            }
        }
    }

    pub fn is_constellation_enabled(&self, constellation: Constellation) -> bool {
        self.constellation_enables
            .as_ref()
            .map(|enables| enables.is_enabled(constellation))
            .unwrap_or(true)
    }
}
