//! Global keyboard shortcuts.
//!
//! One document-level keydown listener: Escape activates the page's back
//! control when present, Ctrl/Cmd + `/` toggles the theme. Everything else
//! is ignored by this listener.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

#[cfg(feature = "browser")]
use crate::context::PageContext;

/// Action bound to a recognized key combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Activate the designated back control, if the page has one.
    Back,
    /// Flip the page theme.
    ToggleTheme,
}

/// Map a keydown to its action, if any.
#[must_use]
pub fn match_shortcut(key: &str, ctrl: bool, meta: bool) -> Option<ShortcutAction> {
    if key == "Escape" {
        return Some(ShortcutAction::Back);
    }
    if (ctrl || meta) && key == "/" {
        return Some(ShortcutAction::ToggleTheme);
    }
    None
}

/// Wire the global keydown listener.
#[cfg(feature = "browser")]
pub fn init(ctx: &PageContext) {
    use wasm_bindgen::JsCast;

    let Some(doc) = crate::dom::document() else {
        return;
    };
    let ctx = ctx.clone();
    crate::dom::on_key(&doc, "keydown", move |ev| {
        match match_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            Some(ShortcutAction::Back) => {
                let Some(back) = crate::dom::document()
                    .and_then(|doc| doc.query_selector(crate::registry::BACK_BUTTON).ok().flatten())
                else {
                    return;
                };
                if let Some(back) = back.dyn_ref::<web_sys::HtmlElement>() {
                    back.click();
                }
            }
            Some(ShortcutAction::ToggleTheme) => {
                ev.prevent_default();
                crate::theme::toggle(&ctx);
            }
            None => {}
        }
    });
}
