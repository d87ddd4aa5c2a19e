//! Polar sky-plot projection
//!
//! Maps satellite elevation and azimuth onto canvas pixels. Zenith lands at
//! the plot center, the horizon at the rim, north points up and azimuth
//! grows clockwise.

use std::f64::consts::PI;

/// Slider midpoint that corresponds to 1.0x zoom
pub const ZOOM_SLIDER_NEUTRAL: f64 = 15.0;

/// Geometry of one radar frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub base_radius: f64,
    pub zoom: f64,
}

impl RadarGeometry {
    /// Geometry for a canvas of the given size, with a 20px margin
    pub fn for_canvas(width: f64, height: f64, zoom: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            center_x,
            center_y,
            base_radius: center_x.min(center_y) - 20.0,
            zoom,
        }
    }

    pub fn adjusted_radius(&self) -> f64 {
        self.base_radius * self.zoom
    }

    /// Project elevation/azimuth (degrees) to canvas coordinates
    pub fn project(&self, elevation: f64, azimuth: f64) -> (f64, f64) {
        let elevation_rad = (90.0 - elevation) * PI / 180.0;
        let azimuth_rad = (azimuth - 90.0) * PI / 180.0;

        let distance = self.adjusted_radius() * elevation_rad / (PI / 2.0);
        let x = self.center_x + distance * azimuth_rad.cos();
        let y = self.center_y + distance * azimuth_rad.sin();
        (x, y)
    }
}

/// Convert the raw zoom slider value (5..=30) into a zoom factor
pub fn zoom_from_slider(value: f64) -> f64 {
    value / ZOOM_SLIDER_NEUTRAL
}
