//! Copy-on-click account fields.
//!
//! Clicking a marked input or textarea selects its full text, copies it to
//! the clipboard best-effort, and flashes the border to the success color
//! for one second before restoring the value captured at click time.
//! Clipboard failure is not surfaced.

#[cfg(test)]
#[path = "copy_field_test.rs"]
mod copy_field_test;

/// How long the success border stays applied.
pub const FEEDBACK_MS: u64 = 1000;

/// Border color flashed after a copy.
pub const SUCCESS_BORDER: &str = "var(--success)";

/// Wire the click handler onto every copy-enabled field.
#[cfg(feature = "browser")]
pub fn init() {
    use std::time::Duration;

    for field in crate::dom::query_all(crate::registry::COPY_FIELDS) {
        let target: web_sys::EventTarget = field.clone().into();
        crate::dom::on(&target, "click", move |_| {
            crate::dom::select_field_text(&field);
            if let Some(value) = crate::dom::field_value(&field) {
                crate::dom::copy_to_clipboard(&value);
            }

            let original_border = crate::dom::inline_value(&field, "border-color");
            crate::dom::set_inline(&field, "border-color", SUCCESS_BORDER);
            let field = field.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(FEEDBACK_MS)).await;
                crate::dom::set_inline(&field, "border-color", &original_border);
            });
        });
    }
}
