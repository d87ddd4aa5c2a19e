//! The GPS dashboard page: telemetry poll loop, radar canvas, view filters.
//!
//! `SatelliteDashboard` owns the 2 s polling cadence. Every poll advances the
//! pure state machine in `ntp-panel-data`; this module only carries out the
//! directives it gets back (redraw, keep cadence, or supersede the cadence
//! with a reconnect retry).

use uuid::Uuid;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use ntp_panel_data::{Schedule, POLL_INTERVAL_MS};
use ntp_panel_renderer::projection::ZOOM_SLIDER_NEUTRAL;
use ntp_panel_renderer::{summary_cards, zoom_from_slider, DisplayFilterState};
use ntp_panel_shared::{Constellation, TelemetrySnapshot};

use crate::dom;
use crate::instance_manager::{DashboardInstance, Dashboards};
use crate::markup;
use crate::timers::{self, IntervalHandle};

#[wasm_bindgen]
pub struct SatelliteDashboard {
    instance_id: Uuid,
}

#[wasm_bindgen]
impl SatelliteDashboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SatelliteDashboard {
        SatelliteDashboard {
            instance_id: Uuid::new_v4(),
        }
    }

    /// Registers the instance and begins polling: one immediate fetch, then
    /// the 2 s cadence.
    pub fn start(&self, base_url: &str) -> Result<(), JsValue> {
        Dashboards::insert(self.instance_id, DashboardInstance::new(base_url));
        spawn_poll(self.instance_id);
        start_cadence(self.instance_id)?;
        log::info!("dashboard {} polling started", self.instance_id);
        Ok(())
    }

    /// Called by the page glue when a `filter_*` checkbox changes.
    pub fn toggle_constellation(&self, key: &str, enabled: bool) -> Result<(), JsValue> {
        let constellation = Constellation::from_key(key)
            .ok_or_else(|| JsValue::from_str(&format!("unknown constellation key: {key}")))?;
        interact(&self.instance_id, |inst| {
            inst.filter.constellations.set_enabled(constellation, enabled);
        })
    }

    pub fn set_show_untracked(&self, value: bool) -> Result<(), JsValue> {
        interact(&self.instance_id, |inst| inst.filter.show_untracked = value)
    }

    pub fn set_show_used_only(&self, value: bool) -> Result<(), JsValue> {
        interact(&self.instance_id, |inst| inst.filter.show_used_only = value)
    }

    pub fn set_show_high_signal(&self, value: bool) -> Result<(), JsValue> {
        interact(&self.instance_id, |inst| {
            inst.filter.show_high_signal = value;
        })
    }

    /// Slider range is 5-30; 15 maps to 1.0x.
    pub fn set_zoom_slider(&self, value: f64) -> Result<(), JsValue> {
        let zoom = zoom_from_slider(value);
        let result = interact(&self.instance_id, |inst| inst.filter.zoom = zoom);
        if let Err(err) = dom::set_text("zoomValue", &format!("{zoom:.1}x")) {
            log::debug!("zoom label unavailable: {err:?}");
        }
        result
    }

    /// Restores the default view (all constellations, untracked shown, zoom
    /// 1.0x) and syncs the control elements to match.
    pub fn reset_view(&self) -> Result<(), JsValue> {
        let result = interact(&self.instance_id, |inst| inst.filter.reset());
        sync_view_controls(&self.instance_id);
        result
    }

    /// Current view filter as a plain JS object.
    pub fn view_state(&self) -> Result<JsValue, JsValue> {
        let filter = Dashboards::with(&self.instance_id, |inst| inst.filter.clone())
            .ok_or_else(|| JsValue::from_str("Dashboard instance not found"))?;
        serde_wasm_bindgen::to_value(&filter).map_err(Into::into)
    }

    /// Stops the poll loop and releases the instance. Call on page unload.
    pub fn destroy(&self) {
        if Dashboards::remove(&self.instance_id).is_some() {
            log::info!("dashboard {} destroyed", self.instance_id);
        }
    }
}

/// Mutates the instance on behalf of a user control, then redraws at once.
/// The interaction timestamp suppresses data-driven redraws for the next
/// 10 s so the user's view does not jump underneath them.
fn interact<F>(instance_id: &Uuid, f: F) -> Result<(), JsValue>
where
    F: FnOnce(&mut DashboardInstance),
{
    let now_ms = js_sys::Date::now();
    Dashboards::with_mut(instance_id, |inst| {
        f(inst);
        inst.poller.note_interaction(now_ms);
    })
    .ok_or_else(|| JsValue::from_str("Dashboard instance not found"))?;
    redraw(instance_id)
}

fn start_cadence(instance_id: Uuid) -> Result<(), JsValue> {
    let handle = IntervalHandle::repeating(POLL_INTERVAL_MS, move || spawn_poll(instance_id))?;
    // If the instance is already gone the handle drops here, which clears
    // the interval again.
    Dashboards::with_mut(&instance_id, |inst| inst.cadence = Some(handle));
    Ok(())
}

fn spawn_poll(instance_id: Uuid) {
    spawn_local(async move {
        if let Some(Schedule::SupersedeWithRetry { delay_ms }) = run_poll(instance_id).await {
            begin_reconnect(instance_id, delay_ms);
        }
    });
}

/// One poll: fetch, advance the state machine, carry out its directive.
/// Returns the scheduling directive, or `None` when the instance is gone.
async fn run_poll(instance_id: Uuid) -> Option<Schedule> {
    let api = Dashboards::with(&instance_id, |inst| inst.api.clone())?;
    let result = api.telemetry().await;
    let now_ms = js_sys::Date::now();

    let directive = Dashboards::with_mut(&instance_id, |inst| match result {
        Ok(snapshot) => inst.poller.apply_success(snapshot, now_ms),
        Err(err) => {
            err.log();
            inst.poller.apply_failure()
        }
    })?;

    refresh_connection_pill(&instance_id);

    if directive.redraw {
        if let Some(changes) = &directive.changes {
            log::debug!("redraw: {}", changes.change_summary.join(", "));
        }
        if let Err(err) = redraw(&instance_id) {
            log::warn!("dashboard redraw failed: {err:?}");
        }
        stamp_last_update();
    }

    Some(directive.schedule)
}

/// After five straight failures: drop the cadence, retry once after the
/// reconnect delay, then resume the cadence whatever the retry's outcome.
fn begin_reconnect(instance_id: Uuid, delay_ms: u32) {
    Dashboards::with_mut(&instance_id, |inst| inst.cadence = None);

    let scheduled = timers::one_shot(delay_ms, move || {
        spawn_local(async move {
            let _ = run_poll(instance_id).await;
            let alive = Dashboards::with(&instance_id, |_| ()).is_some();
            if alive {
                if let Err(err) = start_cadence(instance_id) {
                    log::warn!("failed to resume polling cadence: {err:?}");
                }
            }
        });
    });
    if let Err(err) = scheduled {
        log::warn!("failed to schedule reconnect retry: {err:?}");
    }
}

fn refresh_connection_pill(instance_id: &Uuid) {
    let Some(status) = Dashboards::with(instance_id, |inst| inst.poller.status()) else {
        return;
    };
    if let Ok(pill) = dom::element("connectionStatus") {
        pill.set_text_content(Some(&status.label()));
        pill.set_class_name(&format!("connection-status {}", status.css_class()));
    }
}

/// Repaints the radar and rebuilds the stats, controls, and detail panels
/// from the current snapshot.
fn redraw(instance_id: &Uuid) -> Result<(), JsValue> {
    let parts = Dashboards::with(instance_id, |inst| {
        inst.poller
            .current()
            .map(|snapshot| (snapshot.clone(), inst.filter.clone()))
    });
    let Some(Some((snapshot, filter))) = parts else {
        // Nothing applied yet; the first successful poll will draw.
        return Ok(());
    };

    paint_radar(&snapshot, &filter)?;

    dom::set_inner_html(
        "constellationStats",
        &markup::summary_cards_html(&summary_cards(&snapshot)),
    )?;
    dom::set_inner_html("gnssControls", &markup::gnss_controls_for(&snapshot, &filter))?;
    dom::set_inner_html("datePositionInfo", &markup::detail_section_html(&snapshot))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn paint_radar(snapshot: &TelemetrySnapshot, filter: &DisplayFilterState) -> Result<(), JsValue> {
    let (canvas, context) = dom::canvas_2d("radarChart")?;
    let scene = ntp_panel_renderer::build_scene(
        &snapshot.satellites,
        filter,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );
    ntp_panel_renderer::paint(&context, &scene)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn paint_radar(_snapshot: &TelemetrySnapshot, _filter: &DisplayFilterState) -> Result<(), JsValue> {
    Ok(())
}

/// Pushes the in-memory filter state back onto the checkbox and slider
/// elements after a view reset.
fn sync_view_controls(instance_id: &Uuid) {
    let Some(filter) = Dashboards::with(instance_id, |inst| inst.filter.clone()) else {
        return;
    };

    for constellation in Constellation::ALL {
        let id = format!("filter_{}", constellation.key());
        let _ = dom::set_checkbox(&id, filter.constellations.is_enabled(constellation));
    }
    let _ = dom::set_checkbox("showNotTracked", filter.show_untracked);
    let _ = dom::set_checkbox("showUsedOnly", filter.show_used_only);
    let _ = dom::set_checkbox("showHighSignal", filter.show_high_signal);

    let slider_value = filter.zoom * ZOOM_SLIDER_NEUTRAL;
    let _ = dom::set_input_value("zoomSlider", &format!("{slider_value}"));
    let _ = dom::set_text("zoomValue", &format!("{:.1}x", filter.zoom));
}

fn stamp_last_update() {
    let time: String = js_sys::Date::new_0().to_locale_time_string("en-US").into();
    if let Err(err) = dom::set_text("lastUpdateTime", &time) {
        log::debug!("timestamp element unavailable: {err:?}");
    }
}
