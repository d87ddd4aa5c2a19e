//! Thread-local registries for exported panel instances.
//!
//! wasm-bindgen classes cannot hold non-`'static` borrows, so each exported
//! handle carries only a UUID and the backing state lives here. WASM runs
//! single threaded, which makes `thread_local!` plus `RefCell` sufficient
//! without any locking.

use std::cell::RefCell;
use std::collections::HashMap;

use uuid::Uuid;

use ntp_panel_data::{DeviceApi, PollerState};
use ntp_panel_renderer::DisplayFilterState;

use crate::timers::IntervalHandle;

/// Backing state for a [`crate::SatelliteDashboard`] handle.
pub struct DashboardInstance {
    pub api: DeviceApi,
    pub poller: PollerState,
    pub filter: DisplayFilterState,
    /// Cadence interval. `None` until `start` and while a reconnect retry
    /// owns scheduling.
    pub cadence: Option<IntervalHandle>,
}

impl DashboardInstance {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: DeviceApi::new(base_url),
            poller: PollerState::new(),
            filter: DisplayFilterState::default(),
            cadence: None,
        }
    }
}

/// Backing state for a [`crate::ConfigPanel`] handle.
pub struct PanelInstance {
    pub api: DeviceApi,
    pub status_timer: Option<IntervalHandle>,
}

impl PanelInstance {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: DeviceApi::new(base_url),
            status_timer: None,
        }
    }
}

thread_local! {
    static DASHBOARDS: RefCell<HashMap<Uuid, DashboardInstance>> =
        RefCell::new(HashMap::new());
    static PANELS: RefCell<HashMap<Uuid, PanelInstance>> = RefCell::new(HashMap::new());
}

pub struct Dashboards;

impl Dashboards {
    pub fn insert(id: Uuid, instance: DashboardInstance) {
        DASHBOARDS.with(|cell| {
            cell.borrow_mut().insert(id, instance);
        });
    }

    /// Runs `f` against the instance, or returns `None` if the handle has
    /// been destroyed.
    pub fn with<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&DashboardInstance) -> R,
    {
        DASHBOARDS.with(|cell| cell.borrow().get(id).map(f))
    }

    pub fn with_mut<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut DashboardInstance) -> R,
    {
        DASHBOARDS.with(|cell| cell.borrow_mut().get_mut(id).map(f))
    }

    pub fn remove(id: &Uuid) -> Option<DashboardInstance> {
        DASHBOARDS.with(|cell| cell.borrow_mut().remove(id))
    }
}

pub struct Panels;

impl Panels {
    pub fn insert(id: Uuid, instance: PanelInstance) {
        PANELS.with(|cell| {
            cell.borrow_mut().insert(id, instance);
        });
    }

    pub fn with<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&PanelInstance) -> R,
    {
        PANELS.with(|cell| cell.borrow().get(id).map(f))
    }

    pub fn with_mut<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut PanelInstance) -> R,
    {
        PANELS.with(|cell| cell.borrow_mut().get_mut(id).map(f))
    }

    pub fn remove(id: &Uuid) -> Option<PanelInstance> {
        PANELS.with(|cell| cell.borrow_mut().remove(id))
    }
}
