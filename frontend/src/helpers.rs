//! Browser utilities shared by every panel.
//!
//! - **User Feedback**: the bottom toast, plus the native `alert` and
//!   `confirm` dialogs used for export failures and deletions.
//! - **Clock**: today's date for the countdown and the schedule, and a
//!   millisecond clock for the export debounce.
//! - **Form Input**: reading the current value out of an input event.

use chrono::{Local, NaiveDate};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::TargetCast;

/// How long a toast stays on screen.
pub const TOAST_MS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
///
/// The element is created on the fly and removes itself after
/// [`TOAST_MS`]. Text is inserted as text, never as markup.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// `false` when the member cancels or the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Milliseconds since the epoch, for the export debounce.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current value of the input, textarea or select that fired `event`.
pub fn event_value<E: TargetCast>(event: &E) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}
