//! Thin wrappers over `setInterval`/`setTimeout`.
//!
//! The wrapped [`Closure`] must outlive the browser timer, so the interval
//! handle keeps it alive and clears the timer on drop. One-shot timeouts leak
//! their closure intentionally (`Closure::once` plus `forget`), the same
//! pattern the fetch timeout in `ntp-panel-data` uses.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

/// A repeating browser timer. Cleared when dropped.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn repeating<F>(interval_ms: u32, f: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// Schedules `f` to run once after `delay_ms`.
pub fn one_shot<F>(delay_ms: u32, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(Box::new(f) as Box<dyn FnOnce()>);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    )?;
    closure.forget();
    Ok(())
}
