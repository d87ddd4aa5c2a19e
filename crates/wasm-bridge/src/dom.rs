//! Small web-sys conveniences shared by both exported classes.
//!
//! Every helper addresses elements by ID; the IDs form the contract between
//! this crate and the shipped HTML and match the firmware's page markup.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
    HtmlInputElement};

use ntp_panel_config::Notice;

use crate::markup;
use crate::timers;

/// Banners clear this long after each show, whether or not a newer banner
/// has replaced the text since.
pub const BANNER_DISMISS_MS: u32 = 5_000;

pub fn document() -> Result<Document, JsValue> {
    timers::window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}

pub fn element(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
}

pub fn try_element(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn input(id: &str) -> Result<HtmlInputElement, JsValue> {
    element(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an input")))
}

pub fn input_value(id: &str) -> Result<String, JsValue> {
    Ok(input(id)?.value())
}

pub fn set_input_value(id: &str, value: &str) -> Result<(), JsValue> {
    input(id)?.set_value(value);
    Ok(())
}

pub fn checkbox_checked(id: &str) -> Result<bool, JsValue> {
    Ok(input(id)?.checked())
}

pub fn set_checkbox(id: &str, checked: bool) -> Result<(), JsValue> {
    input(id)?.set_checked(checked);
    Ok(())
}

pub fn set_text(id: &str, text: &str) -> Result<(), JsValue> {
    element(id)?.set_text_content(Some(text));
    Ok(())
}

pub fn set_inner_html(id: &str, html: &str) -> Result<(), JsValue> {
    element(id)?.set_inner_html(html);
    Ok(())
}

pub fn set_display(id: &str, value: &str) -> Result<(), JsValue> {
    let element: HtmlElement = element(id)?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HTML element")))?;
    element.style().set_property("display", value)?;
    Ok(())
}

/// The radar canvas and its 2D context
pub fn canvas_2d(id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas: HtmlCanvasElement = element(id)?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not a canvas")))?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
    Ok((canvas, context))
}

pub fn confirm(message: &str) -> bool {
    timers::window()
        .and_then(|window| window.confirm_with_message(message))
        .unwrap_or(false)
}

/// Shows the transient banner and arms its dismiss timer.
pub fn show_banner(notice: &Notice) {
    if set_inner_html("messageContainer", &markup::banner_html(notice)).is_err() {
        log::warn!("banner container missing: {}", notice.text);
        return;
    }
    let armed = timers::one_shot(BANNER_DISMISS_MS, || {
        if let Ok(container) = element("messageContainer") {
            container.set_inner_html("");
        }
    });
    if armed.is_err() {
        log::warn!("failed to arm banner dismiss timer");
    }
}

pub fn show_loading() {
    if let Err(err) = set_display("loadingIndicator", "block") {
        log::debug!("loading indicator unavailable: {err:?}");
    }
}

pub fn hide_loading() {
    if let Err(err) = set_display("loadingIndicator", "none") {
        log::debug!("loading indicator unavailable: {err:?}");
    }
}

/// Custom dropdown widgets keep their value in a hidden input (`#{field}`)
/// and their visible label in a span (`#{field}_selected`). Syncs the input,
/// the label, and the option highlight to `value`.
pub fn sync_dropdown(field: &str, value: &str) -> Result<(), JsValue> {
    set_input_value(field, value)?;

    let Some(dropdown) = try_element(&format!("{field}_dropdown")) else {
        // Plain input markup; nothing visual to sync.
        return Ok(());
    };
    let options = dropdown.query_selector_all(".custom-dropdown-option")?;
    for index in 0..options.length() {
        let Some(option) = options.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        option.class_list().remove_1("selected")?;
        if option.get_attribute("data-value").as_deref() == Some(value) {
            option.class_list().add_1("selected")?;
            if let Some(span) = try_element(&format!("{field}_selected")) {
                span.set_text_content(option.text_content().as_deref());
            }
        }
    }
    Ok(())
}

/// Marks a form input invalid: adds the error class and inserts an
/// explanatory line right after the field.
pub fn mark_field_error(field: &str, message: &str) -> Result<(), JsValue> {
    let input = element(field)?;
    input.class_list().add_1("error-field")?;

    let note = document()?.create_element("div")?;
    note.set_class_name("field-error");
    note.set_text_content(Some(message));

    if let Some(parent) = input.parent_node() {
        parent.insert_before(&note, input.next_sibling().as_ref())?;
    }
    Ok(())
}

/// Removes every marker left by a previous validation round.
pub fn clear_field_errors() -> Result<(), JsValue> {
    let document = document()?;

    let marked = document.query_selector_all(".error-field")?;
    for index in 0..marked.length() {
        if let Some(element) = marked.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            element.class_list().remove_1("error-field")?;
        }
    }

    let notes = document.query_selector_all(".field-error")?;
    for index in 0..notes.length() {
        if let Some(element) = notes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            element.remove();
        }
    }
    Ok(())
}
