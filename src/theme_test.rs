#![cfg(not(feature = "browser"))]

use super::*;
use crate::context::KeyValueStore;

// =============================================================
// Theme parsing and literals
// =============================================================

#[test]
fn as_str_matches_persisted_literals() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn parse_roundtrips_both_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_anything_else() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn flipping_twice_returns_to_start() {
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn icon_class_is_moon_for_dark_sun_otherwise() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
}

// =============================================================
// Resolution precedence
// =============================================================

#[test]
fn saved_preference_beats_os_signal() {
    assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn os_signal_decides_when_nothing_saved() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

// =============================================================
// Persistence through the context
// =============================================================

#[test]
fn set_theme_persists_the_literal_value() {
    let ctx = PageContext::in_memory(false);
    set_theme(&ctx, Theme::Dark);
    assert_eq!(ctx.store.get(registry::THEME_STORAGE_KEY).as_deref(), Some("dark"));
    set_theme(&ctx, Theme::Light);
    assert_eq!(ctx.store.get(registry::THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn init_persists_the_resolved_theme() {
    let ctx = PageContext::in_memory(true);
    assert_eq!(saved_preference(&ctx), None);
    init(&ctx);
    assert_eq!(saved_preference(&ctx), Some(Theme::Dark));
}

#[test]
fn init_keeps_an_existing_preference() {
    let ctx = PageContext::in_memory(true);
    ctx.store.set(registry::THEME_STORAGE_KEY, "light");
    init(&ctx);
    assert_eq!(saved_preference(&ctx), Some(Theme::Light));
}

#[test]
fn unparseable_preference_is_treated_as_absent() {
    let ctx = PageContext::in_memory(true);
    ctx.store.set(registry::THEME_STORAGE_KEY, "sepia");
    assert_eq!(saved_preference(&ctx), None);
    init(&ctx);
    assert_eq!(saved_preference(&ctx), Some(Theme::Dark));
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_flips_the_persisted_value() {
    let ctx = PageContext::in_memory(false);
    init(&ctx);
    assert_eq!(saved_preference(&ctx), Some(Theme::Light));
    toggle(&ctx);
    assert_eq!(saved_preference(&ctx), Some(Theme::Dark));
}

#[test]
fn toggling_twice_restores_the_original_state() {
    for prefers_dark in [false, true] {
        let ctx = PageContext::in_memory(prefers_dark);
        init(&ctx);
        let before = current(&ctx);
        toggle(&ctx);
        toggle(&ctx);
        assert_eq!(current(&ctx), before);
    }
}

#[test]
fn current_falls_back_to_resolution_off_browser() {
    let ctx = PageContext::in_memory(true);
    assert_eq!(current(&ctx), Theme::Dark);
    ctx.store.set(registry::THEME_STORAGE_KEY, "light");
    assert_eq!(current(&ctx), Theme::Light);
}
