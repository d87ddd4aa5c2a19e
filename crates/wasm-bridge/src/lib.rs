//! Browser entry points for the GPS NTP server web panel.
//!
//! This crate is the only one compiled to a cdylib. It exports two
//! wasm-bindgen classes: [`SatelliteDashboard`] owns the telemetry poll loop
//! and the radar canvas, [`ConfigPanel`] owns the configuration forms and the
//! status grid. Exported handles carry nothing but a UUID; the real state
//! lives in thread-local registries (see [`instance_manager`]) so handles
//! stay trivially movable on the JS side.

mod config_panel;
mod dashboard;
mod dom;
mod instance_manager;
mod markup;
mod timers;

use std::sync::Once;

use wasm_bindgen::prelude::*;

pub use config_panel::ConfigPanel;
pub use dashboard::SatelliteDashboard;

static INIT_LOGGER: Once = Once::new();

/// Module-level setup. Runs once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    INIT_LOGGER.call_once(|| {
        console_log::init_with_level(log::Level::Info).expect("error initializing logger");
    });

    log::info!("ntp-panel-wasm initialized");
}
