use super::*;

#[test]
fn copy_fields_cover_inputs_and_textareas() {
    assert!(COPY_FIELDS.contains("input"));
    assert!(COPY_FIELDS.contains("textarea"));
}

#[test]
fn fragment_anchor_selector_matches_hash_hrefs_only() {
    assert_eq!(FRAGMENT_ANCHORS, "a[href^=\"#\"]");
}

#[test]
fn theme_contract_uses_the_fixed_names() {
    assert_eq!(THEME_STORAGE_KEY, "theme");
    assert_eq!(THEME_ATTRIBUTE, "data-theme");
    assert_eq!(THEME_ICON_ID, "theme-icon");
}

#[test]
fn marker_selectors_are_class_based() {
    for selector in [FLASH_MESSAGES, BACK_BUTTON, SERVICE_CARDS] {
        assert!(selector.starts_with('.'), "{selector} should be a class selector");
    }
}
