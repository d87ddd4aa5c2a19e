//! Sky-plot rendering for the satellite dashboard
//!
//! Everything except the final canvas pass is pure: projection, filtering
//! and scene assembly take telemetry in and hand draw operations out, so
//! they run and test on any target. Only [`canvas`] touches the browser.

pub mod filter;
pub mod projection;
pub mod scene;
pub mod summary;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use filter::DisplayFilterState;
pub use projection::{zoom_from_slider, RadarGeometry};
pub use scene::{build_scene, DrawOp, RadarScene, TextAlign};
pub use summary::{
    detail_items, gnss_control_rows, narrative_for, summary_cards, ConstellationCard, DetailItem,
    FixNarrative, GnssControlRow, SummaryCards,
};

#[cfg(target_arch = "wasm32")]
pub use canvas::paint;
