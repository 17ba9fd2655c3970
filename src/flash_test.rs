use super::*;

#[test]
fn message_lifetime_is_five_seconds_plus_fade() {
    assert_eq!(VISIBLE_MS, 5000);
    assert_eq!(FADE_MS, 300);
}

#[test]
fn fade_hides_and_lifts_the_message() {
    let style = fade_style();
    assert!(style.contains(&("opacity", "0")));
    assert!(style.contains(&("transform", "translateY(-10px)")));
}
