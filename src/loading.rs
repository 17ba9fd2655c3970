//! Submit-button loading state with a fixed fallback reset.
//!
//! On submit, the form's submit button (when present) swaps its label for a
//! spinner and is disabled. This layer has no visibility into navigation or
//! the server response, so the original label is restored by a blind timer
//! after 5 seconds whether or not the submission finished.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Fallback delay before the button is restored.
pub const FALLBACK_MS: u64 = 5000;

/// Markup shown on the button while the submission is in flight.
pub const SAVING_MARKUP: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Saving...";

/// Wire the loading-state handler onto every form.
#[cfg(feature = "browser")]
pub fn init() {
    use std::time::Duration;
    use wasm_bindgen::JsCast;

    for form in crate::dom::query_all(crate::registry::FORMS) {
        let target: web_sys::EventTarget = form.clone().into();
        crate::dom::on(&target, "submit", move |_| {
            let Ok(Some(button)) = form.query_selector(crate::registry::SUBMIT_BUTTON) else {
                return;
            };
            let Ok(button) = button.dyn_into::<web_sys::HtmlButtonElement>() else {
                return;
            };

            let original_markup = button.inner_html();
            button.set_inner_html(SAVING_MARKUP);
            button.set_disabled(true);

            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(FALLBACK_MS)).await;
                button.set_inner_html(&original_markup);
                button.set_disabled(false);
            });
        });
    }
}
