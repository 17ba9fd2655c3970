use super::*;

#[test]
fn fallback_reset_fires_after_five_seconds() {
    assert_eq!(FALLBACK_MS, 5000);
}

#[test]
fn saving_markup_shows_a_spinner_and_label() {
    assert!(SAVING_MARKUP.contains("fa-spinner"));
    assert!(SAVING_MARKUP.contains("fa-spin"));
    assert!(SAVING_MARKUP.ends_with("Saving..."));
}
