//! Progressive enhancement layer for the portal's server-rendered pages.
//!
//! This crate is compiled to WebAssembly and attached to every page. The
//! server renders complete HTML; this layer only decorates it: theme
//! preference, auto-dismissing flash messages, copy-on-click fields, image
//! previews, required-field validation, smooth anchor scrolling, keyboard
//! shortcuts, submit-button loading states, and staggered card entrances.
//! Each enhancement is independent and wired once by [`boot`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | Composition root: DOM-ready dispatch and wiring order |
//! | [`context`] | Injected storage / OS-scheme capabilities ([`context::PageContext`]) |
//! | [`registry`] | Declarative DOM contract (selectors, ids, storage key) |
//! | [`theme`] | Theme preference: resolve, persist, toggle, OS watcher |
//! | [`flash`] | Flash message auto-dismissal |
//! | [`copy_field`] | Copy-on-click account fields |
//! | [`file_preview`] | Local image preview for file inputs |
//! | [`form_validate`] | Required-field validation on submit |
//! | [`scroll`] | Smooth scrolling for in-page anchors |
//! | [`keyboard`] | Global keyboard shortcuts |
//! | [`loading`] | Submit-button loading state with fallback reset |
//! | [`cards`] | Staggered card entrance animation |
//! | [`dom`] | Browser-only web-sys glue shared by the above |

pub mod boot;
pub mod cards;
pub mod context;
pub mod copy_field;
pub mod dom;
pub mod file_preview;
pub mod flash;
pub mod form_validate;
pub mod keyboard;
pub mod loading;
pub mod registry;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point, invoked once when the WASM module loads.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    boot::run();
}
