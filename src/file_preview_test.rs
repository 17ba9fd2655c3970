use super::*;

// =============================================================
// MIME gate
// =============================================================

#[test]
fn image_types_are_previewable() {
    assert!(is_image("image/png"));
    assert!(is_image("image/jpeg"));
    assert!(is_image("image/svg+xml"));
}

#[test]
fn non_image_types_are_not() {
    assert!(!is_image("application/pdf"));
    assert!(!is_image("text/plain"));
    assert!(!is_image(""));
}

#[test]
fn prefix_must_match_exactly() {
    assert!(!is_image("IMAGE/png"));
    assert!(!is_image("video/image"));
}

// =============================================================
// Preview markup
// =============================================================

#[test]
fn markup_embeds_the_data_url() {
    let markup = preview_markup("data:image/png;base64,AAAA");
    assert!(markup.contains("<p>Preview:</p>"));
    assert!(markup.contains("src=\"data:image/png;base64,AAAA\""));
    assert!(markup.contains("class=\"icon-preview\""));
}

#[test]
fn markup_escapes_quotes_in_the_url() {
    let markup = preview_markup("data:x\"y");
    assert!(!markup.contains("x\"y"));
    assert!(markup.contains("x&quot;y"));
}

#[test]
fn preview_block_styling_is_fixed() {
    let style = preview_style();
    assert!(style.contains(&("margin-top", "10px")));
    assert!(style.contains(&("background", "var(--bg-secondary)")));
}
