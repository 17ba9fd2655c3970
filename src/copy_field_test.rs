use super::*;

#[test]
fn feedback_lasts_exactly_one_second() {
    assert_eq!(FEEDBACK_MS, 1000);
}

#[test]
fn feedback_uses_the_page_success_color() {
    assert_eq!(SUCCESS_BORDER, "var(--success)");
}
