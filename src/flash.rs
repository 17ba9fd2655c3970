//! Auto-dismissal of flash messages.
//!
//! Each `.flash-message` present at wiring time lives for a fixed 5 seconds,
//! fades out over 300 ms, and is then removed from the document. There is no
//! cancellation path; a message removed by other means first makes the
//! scheduled callback a no-op via the still-attached check.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// Visible lifetime before the fade begins.
pub const VISIBLE_MS: u64 = 5000;

/// Fade transition duration before removal.
pub const FADE_MS: u64 = 300;

/// Inline style pairs applied to start the fade.
#[must_use]
pub fn fade_style() -> [(&'static str, &'static str); 2] {
    [("opacity", "0"), ("transform", "translateY(-10px)")]
}

/// Schedule dismissal for every flash message currently in the document.
#[cfg(feature = "browser")]
pub fn init() {
    use std::time::Duration;

    for message in crate::dom::query_all(crate::registry::FLASH_MESSAGES) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(VISIBLE_MS)).await;
            // Skip messages something else already removed.
            if message.parent_element().is_none() {
                return;
            }
            for (property, value) in fade_style() {
                crate::dom::set_inline(&message, property, value);
            }
            gloo_timers::future::sleep(Duration::from_millis(FADE_MS)).await;
            message.remove();
        });
    }
}
