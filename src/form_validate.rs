//! Required-field validation on form submit.
//!
//! Every submit attempt re-checks all `[required]` fields from scratch. A
//! field whose trimmed value is empty gets the error border and a one-shot
//! listener that clears it on the field's next input. If anything failed,
//! the submission is cancelled and one blocking alert is shown; it names no
//! specific field, and the user simply retries.

#[cfg(test)]
#[path = "form_validate_test.rs"]
mod form_validate_test;

/// Border color applied to a failed field.
pub const ERROR_BORDER: &str = "var(--danger)";

/// Alert text shown when a submit attempt fails validation.
pub const VALIDATION_ALERT: &str = "Please fill in all required fields.";

/// Whether a field value counts as empty (whitespace-only is empty).
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Wire the submit-time validator onto every form.
#[cfg(feature = "browser")]
pub fn init() {
    for form in crate::dom::query_all(crate::registry::FORMS) {
        let target: web_sys::EventTarget = form.clone().into();
        crate::dom::on(&target, "submit", move |ev| {
            let mut valid = true;
            for field in crate::dom::query_all_within(&form, crate::registry::REQUIRED_FIELDS) {
                let value = crate::dom::field_value(&field).unwrap_or_default();
                if !is_blank(&value) {
                    continue;
                }
                valid = false;
                crate::dom::set_inline(&field, "border-color", ERROR_BORDER);
                let field_target: web_sys::EventTarget = field.clone().into();
                crate::dom::on_once(&field_target, "input", move |_| {
                    crate::dom::set_inline(&field, "border-color", "");
                });
            }
            if !valid {
                ev.prevent_default();
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(VALIDATION_ALERT);
                }
            }
        });
    }
}
