#![cfg(feature = "browser")]
//! Composition root: wires every enhancement to the live page.
//!
//! The entrance stylesheet and the OS theme watcher are attached as soon as
//! the module runs; the per-element handlers wait for the document's
//! structural content. Initialization runs once, in a fixed order, and each
//! enhancement is independent of the others.

use crate::context::PageContext;

/// Wire everything, deferring to `DOMContentLoaded` when the page is still
/// loading.
pub fn run() {
    let ctx = PageContext::browser();

    crate::cards::inject_entrance_style();
    crate::theme::watch_system(&ctx);

    let Some(doc) = crate::dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        crate::dom::on(&doc, "DOMContentLoaded", move |_| init_all(&ctx));
    } else {
        init_all(&ctx);
    }
}

fn init_all(ctx: &PageContext) {
    crate::theme::init(ctx);
    crate::flash::init();
    crate::copy_field::init();
    crate::file_preview::init();
    crate::form_validate::init();
    crate::scroll::init();
    crate::keyboard::init(ctx);
    crate::loading::init();
    crate::cards::init();
    log::debug!("page enhancements wired");
}
