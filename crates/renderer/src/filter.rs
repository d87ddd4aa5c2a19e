//! Which satellites the sky plot shows
//!
//! Mirrors the dashboard's filter checkboxes and zoom slider. The default
//! shows everything the receiver reports, tracked or not.

use ntp_panel_shared::{ConstellationEnables, SatelliteEntry};
use serde::{Deserialize, Serialize};

/// Signal strength (dB-Hz) above which "strong signals only" keeps a satellite
pub const HIGH_SIGNAL_THRESHOLD: u8 = 35;

/// View-side display filters. Independent of the receiver's own
/// constellation enables, which say what the hardware tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFilterState {
    pub constellations: ConstellationEnables,
    pub show_untracked: bool,
    pub show_used_only: bool,
    pub show_high_signal: bool,
    pub zoom: f64,
}

impl Default for DisplayFilterState {
    fn default() -> Self {
        Self {
            constellations: ConstellationEnables::default(),
            show_untracked: true,
            show_used_only: false,
            show_high_signal: false,
            zoom: 1.0,
        }
    }
}

impl DisplayFilterState {
    /// Back to the defaults, zoom included
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn passes(&self, satellite: &SatelliteEntry) -> bool {
        if !self.constellations.is_enabled(satellite.constellation) {
            return false;
        }
        if !self.show_untracked && !satellite.tracked {
            return false;
        }
        if self.show_used_only && !satellite.used_in_nav {
            return false;
        }
        if self.show_high_signal && satellite.signal_strength <= HIGH_SIGNAL_THRESHOLD {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntp_panel_shared::Constellation;

    fn satellite(constellation: Constellation) -> SatelliteEntry {
        SatelliteEntry {
            prn: 12,
            constellation,
            elevation: 45.0,
            azimuth: 120.0,
            signal_strength: 40,
            used_in_nav: true,
            tracked: true,
        }
    }

    #[test]
    fn test_default_shows_a_tracked_satellite() {
        let filter = DisplayFilterState::default();
        assert!(filter.passes(&satellite(Constellation::Gps)));
    }

    #[test]
    fn test_disabled_constellation_hides() {
        let mut filter = DisplayFilterState::default();
        filter
            .constellations
            .set_enabled(Constellation::Glonass, false);

        assert!(!filter.passes(&satellite(Constellation::Glonass)));
        assert!(filter.passes(&satellite(Constellation::Gps)));
    }

    #[test]
    fn test_untracked_hidden_only_when_asked() {
        let mut sat = satellite(Constellation::Gps);
        sat.tracked = false;
        sat.used_in_nav = false;

        let mut filter = DisplayFilterState::default();
        assert!(filter.passes(&sat));

        filter.show_untracked = false;
        assert!(!filter.passes(&sat));
    }

    #[test]
    fn test_used_only_drops_idle_satellites() {
        let mut sat = satellite(Constellation::Gps);
        sat.used_in_nav = false;

        let mut filter = DisplayFilterState::default();
        filter.show_used_only = true;
        assert!(!filter.passes(&sat));

        sat.used_in_nav = true;
        assert!(filter.passes(&sat));
    }

    #[test]
    fn test_high_signal_threshold_is_exclusive() {
        let mut filter = DisplayFilterState::default();
        filter.show_high_signal = true;

        let mut sat = satellite(Constellation::Gps);
        sat.signal_strength = 35;
        assert!(!filter.passes(&sat));

        sat.signal_strength = 36;
        assert!(filter.passes(&sat));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filter = DisplayFilterState::default();
        filter.zoom = 2.0;
        filter.show_used_only = true;
        filter.constellations.set_enabled(Constellation::Qzss, false);

        filter.reset();
        assert_eq!(filter, DisplayFilterState::default());
    }
}
