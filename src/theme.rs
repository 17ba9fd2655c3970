//! Theme preference: resolution, persistence, and application.
//!
//! The active theme is resolved as: persisted value if present, else the OS
//! dark-scheme signal, else light. Setting a theme writes the root
//! `data-theme` attribute, persists the value, and mirrors an optional
//! toolbar icon. A separate watcher re-applies OS theme changes only while
//! no preference is persisted, so an explicit choice always wins.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::context::{KeyValueStore as _, PageContext, SchemeSignal as _};
use crate::registry;

/// Page-wide color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal persisted/attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted/attribute value; anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class mirrored onto the toolbar icon, when one exists.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }

    /// Theme matching an OS dark-scheme sample.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Saved preference wins; otherwise the OS scheme decides.
#[must_use]
pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Theme {
    saved.unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark))
}

/// The persisted preference, if one exists and parses.
#[must_use]
pub fn saved_preference(ctx: &PageContext) -> Option<Theme> {
    ctx.store
        .get(registry::THEME_STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
}

/// Resolve and apply the startup theme. Persists the resolved value, so the
/// OS signal only steers pages loaded before the first visit stored one.
pub fn init(ctx: &PageContext) {
    let theme = resolve(saved_preference(ctx), ctx.scheme.prefers_dark());
    set_theme(ctx, theme);
}

/// Persist `theme`, reflect it on the document root, and sync the icon.
pub fn set_theme(ctx: &PageContext, theme: Theme) {
    apply_to_document(theme);
    ctx.store.set(registry::THEME_STORAGE_KEY, theme.as_str());
}

/// Flip whatever theme the page currently shows.
pub fn toggle(ctx: &PageContext) {
    set_theme(ctx, current(ctx).flipped());
}

/// Theme currently reflected on the document root. Off-browser (and before
/// the attribute exists) this falls back to the resolved preference.
#[must_use]
pub fn current(ctx: &PageContext) -> Theme {
    #[cfg(feature = "browser")]
    {
        if let Some(raw) = crate::dom::document()
            .and_then(|doc| doc.document_element())
            .and_then(|root| root.get_attribute(registry::THEME_ATTRIBUTE))
        {
            return Theme::parse(&raw).unwrap_or(Theme::Light);
        }
    }
    resolve(saved_preference(ctx), ctx.scheme.prefers_dark())
}

fn apply_to_document(theme: Theme) {
    #[cfg(feature = "browser")]
    {
        let Some(doc) = crate::dom::document() else {
            return;
        };
        if let Some(root) = doc.document_element() {
            let _ = root.set_attribute(registry::THEME_ATTRIBUTE, theme.as_str());
        }
        if let Some(icon) = doc.get_element_by_id(registry::THEME_ICON_ID) {
            icon.set_class_name(theme.icon_class());
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = theme;
    }
}

/// Follow later OS scheme changes while no preference is persisted.
#[cfg(feature = "browser")]
pub fn watch_system(ctx: &PageContext) {
    use wasm_bindgen::JsCast;

    let Some(mql) = web_sys::window().and_then(|w| w.match_media(registry::DARK_SCHEME_QUERY).ok().flatten()) else {
        return;
    };
    let ctx = ctx.clone();
    crate::dom::on(&mql, "change", move |ev| {
        if saved_preference(&ctx).is_some() {
            return;
        }
        if let Some(ev) = ev.dyn_ref::<web_sys::MediaQueryListEvent>() {
            set_theme(&ctx, Theme::from_prefers_dark(ev.matches()));
        }
    });
}
