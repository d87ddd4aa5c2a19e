//! Derived view models for the panels beside the sky plot
//!
//! Constellation count cards, the per-constellation filter rows and the
//! date/position readout. All pure; the bridge turns these into markup.

use ntp_panel_shared::format::{format_utc, mps_to_kmh, mps_to_mph};
use ntp_panel_shared::{Constellation, TelemetrySnapshot};

use crate::filter::DisplayFilterState;

/// One colored count card in the constellation summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstellationCard {
    pub constellation: Constellation,
    pub label: &'static str,
    pub color: &'static str,
    pub used: u8,
    pub total: u8,
    /// False when the receiver has this system switched off; the card dims
    pub device_enabled: bool,
}

/// The whole summary strip: overall totals first, then one card per
/// constellation that currently has satellites in view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub satellites_total: u8,
    pub satellites_used: u8,
    pub constellations: Vec<ConstellationCard>,
}

pub fn summary_cards(snapshot: &TelemetrySnapshot) -> SummaryCards {
    let stats = snapshot.stats();

    let constellations = Constellation::SUMMARY_ORDER
        .into_iter()
        .filter_map(|constellation| {
            let counts = stats.counts(constellation);
            (counts.total > 0).then(|| ConstellationCard {
                constellation,
                label: constellation.label(),
                color: constellation.color(),
                used: counts.used,
                total: counts.total,
                device_enabled: snapshot.is_constellation_enabled(constellation),
            })
        })
        .collect();

    SummaryCards {
        satellites_total: stats.satellites_total,
        satellites_used: stats.satellites_used,
        constellations,
    }
}

/// One row of the constellation filter controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GnssControlRow {
    pub constellation: Constellation,
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    /// Whether the receiver hardware is configured to track this system
    pub device_enabled: bool,
    /// Whether the view filter checkbox is ticked
    pub checked: bool,
}

pub fn gnss_control_rows(
    snapshot: &TelemetrySnapshot,
    filter: &DisplayFilterState,
) -> Vec<GnssControlRow> {
    Constellation::ALL
        .into_iter()
        .map(|constellation| GnssControlRow {
            constellation,
            key: constellation.key(),
            label: constellation.label(),
            color: constellation.color(),
            device_enabled: snapshot.is_constellation_enabled(constellation),
            checked: filter.constellations.is_enabled(constellation),
        })
        .collect()
}

/// What the date/position panel should say about the fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixNarrative {
    /// Nothing heard from the sky yet
    NoSignal,
    /// Satellites in view but no position-qualifying fix
    Acquiring,
    /// A usable 2D/3D fix; show the full readout
    ValidFix,
}

impl FixNarrative {
    /// Placeholder text, or None when the detail readout applies
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FixNarrative::NoSignal => Some("No GPS signal received"),
            FixNarrative::Acquiring => Some("Acquiring position..."),
            FixNarrative::ValidFix => None,
        }
    }
}

pub fn narrative_for(snapshot: &TelemetrySnapshot) -> FixNarrative {
    if snapshot.data_valid && snapshot.fix_type.has_position() {
        FixNarrative::ValidFix
    } else if snapshot.satellites_total > 0 || !snapshot.satellites.is_empty() {
        FixNarrative::Acquiring
    } else {
        FixNarrative::NoSignal
    }
}

/// One labelled line of the date/position readout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

fn item(label: &'static str, value: String) -> DetailItem {
    DetailItem { label, value }
}

/// The full readout for a snapshot with a usable fix
pub fn detail_items(snapshot: &TelemetrySnapshot) -> Vec<DetailItem> {
    vec![
        item(
            "Fix Status",
            format!(
                "{} (Type {})",
                snapshot.fix_type.display_name(),
                u8::from(snapshot.fix_type)
            ),
        ),
        item(
            "Position",
            format!("{:.6}°, {:.6}°", snapshot.latitude, snapshot.longitude),
        ),
        item("Altitude", format!("{:.1} m", snapshot.altitude)),
        item("UTC Time", format_utc(snapshot.utc_time)),
        item(
            "Speed",
            format!(
                "{:.1} m/s ({:.1} km/h, {:.1} mph)",
                snapshot.speed,
                mps_to_kmh(snapshot.speed),
                mps_to_mph(snapshot.speed)
            ),
        ),
        item("Course", format!("{:.1}°", snapshot.course)),
        item("HDOP", format!("{:.2}", snapshot.hdop)),
        item("VDOP", format!("{:.2}", snapshot.vdop)),
        item("3D Accuracy", format!("{:.1} m", snapshot.accuracy_3d)),
        item("2D Accuracy", format!("{:.1} m", snapshot.accuracy_2d)),
        item("TTFF", format!("{} seconds", snapshot.ttff)),
    ]
}
