//! Radar scene assembly
//!
//! Builds the full draw list for one frame: elevation rings, crosshair,
//! compass labels, then one marker, signal bar and PRN label per visible
//! satellite. The list is plain data so the grid math tests off-browser.

use ntp_panel_shared::SatelliteEntry;

use crate::filter::DisplayFilterState;
use crate::projection::RadarGeometry;

const RING_STROKE: &str = "rgba(255, 255, 255, 0.3)";
const AXIS_STROKE: &str = "rgba(255, 255, 255, 0.5)";
const CARDINAL_FILL: &str = "rgba(255, 255, 255, 0.8)";
const RING_LABEL_FILL: &str = "rgba(255, 255, 255, 0.6)";
const SIGNAL_BAR_FILL: &str = "rgba(255, 255, 255, 0.7)";

const CARDINAL_FONT: &str = "14px Arial";
const RING_LABEL_FONT: &str = "12px Arial";
const PRN_FONT: &str = "10px Arial";

const MARKER_RADIUS_USED: f64 = 8.0;
const MARKER_RADIUS_IDLE: f64 = 6.0;

/// Signal strength that maps to a full-height bar
const SIGNAL_FULL_SCALE: f64 = 50.0;
const SIGNAL_BAR_MAX_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One canvas operation, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    StrokeCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
        line_width: f64,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: &'static str,
        line_width: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Text {
        content: String,
        x: f64,
        y: f64,
        font: &'static str,
        color: &'static str,
        align: TextAlign,
    },
}

/// A complete frame, ready for the canvas painter
#[derive(Debug, Clone)]
pub struct RadarScene {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

/// Assemble the draw list for one frame
pub fn build_scene(
    satellites: &[SatelliteEntry],
    filter: &DisplayFilterState,
    width: f64,
    height: f64,
) -> RadarScene {
    let geo = RadarGeometry::for_canvas(width, height, filter.zoom);
    let radius = geo.adjusted_radius();
    let mut ops = Vec::new();

    // Elevation rings every 30 degrees
    for i in 1..=3 {
        ops.push(DrawOp::StrokeCircle {
            x: geo.center_x,
            y: geo.center_y,
            radius: radius / 3.0 * i as f64,
            color: RING_STROKE,
            line_width: 1.0,
        });
    }

    // Crosshair
    ops.push(DrawOp::Line {
        x1: geo.center_x,
        y1: geo.center_y - radius,
        x2: geo.center_x,
        y2: geo.center_y + radius,
        color: AXIS_STROKE,
        line_width: 1.0,
    });
    ops.push(DrawOp::Line {
        x1: geo.center_x - radius,
        y1: geo.center_y,
        x2: geo.center_x + radius,
        y2: geo.center_y,
        color: AXIS_STROKE,
        line_width: 1.0,
    });

    // Compass points
    let cardinal = |content: &str, x: f64, y: f64, align: TextAlign| DrawOp::Text {
        content: content.to_string(),
        x,
        y,
        font: CARDINAL_FONT,
        color: CARDINAL_FILL,
        align,
    };
    ops.push(cardinal("N", geo.center_x, geo.center_y - radius - 10.0, TextAlign::Center));
    ops.push(cardinal("S", geo.center_x, geo.center_y + radius + 20.0, TextAlign::Center));
    ops.push(cardinal("E", geo.center_x + radius + 10.0, geo.center_y + 5.0, TextAlign::Left));
    ops.push(cardinal("W", geo.center_x - radius - 10.0, geo.center_y + 5.0, TextAlign::Right));

    // Ring labels, zenith angle in degrees
    let ring_label = |content: &str, x: f64| DrawOp::Text {
        content: content.to_string(),
        x,
        y: geo.center_y - 5.0,
        font: RING_LABEL_FONT,
        color: RING_LABEL_FILL,
        align: TextAlign::Center,
    };
    ops.push(ring_label("30°", geo.center_x + radius / 3.0));
    ops.push(ring_label("60°", geo.center_x + radius * 2.0 / 3.0));
    ops.push(ring_label("90°", geo.center_x + radius - 15.0));

    for satellite in satellites {
        if !filter.passes(satellite) {
            continue;
        }

        let (x, y) = geo.project(satellite.elevation as f64, satellite.azimuth as f64);

        ops.push(DrawOp::FillCircle {
            x,
            y,
            radius: if satellite.used_in_nav {
                MARKER_RADIUS_USED
            } else {
                MARKER_RADIUS_IDLE
            },
            color: satellite.constellation.color(),
        });

        if satellite.signal_strength > 0 {
            let bar_height =
                satellite.signal_strength as f64 / SIGNAL_FULL_SCALE * SIGNAL_BAR_MAX_HEIGHT;
            ops.push(DrawOp::FillRect {
                x: x - 2.0,
                y: y - bar_height - 10.0,
                width: 4.0,
                height: bar_height,
                color: SIGNAL_BAR_FILL,
            });
        }

        ops.push(DrawOp::Text {
            content: satellite.prn.to_string(),
            x,
            y: y + 20.0,
            font: PRN_FONT,
            color: "white",
            align: TextAlign::Center,
        });
    }

    RadarScene { width, height, ops }
}
