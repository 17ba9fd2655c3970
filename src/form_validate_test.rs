use super::*;

// =============================================================
// Blank check
// =============================================================

#[test]
fn empty_value_is_blank() {
    assert!(is_blank(""));
}

#[test]
fn whitespace_only_value_is_blank() {
    assert!(is_blank("  "));
    assert!(is_blank("\t\n"));
}

#[test]
fn padded_content_is_not_blank() {
    assert!(!is_blank("  x  "));
    assert!(!is_blank("value"));
}

// =============================================================
// User-visible feedback
// =============================================================

#[test]
fn failed_fields_use_the_danger_border() {
    assert_eq!(ERROR_BORDER, "var(--danger)");
}

#[test]
fn alert_names_no_specific_field() {
    assert_eq!(VALIDATION_ALERT, "Please fill in all required fields.");
}
