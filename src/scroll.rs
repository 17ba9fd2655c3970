//! Smooth scrolling for in-page anchor links.
//!
//! Clicks on anchors whose href is a fragment reference are intercepted and
//! default navigation is always suppressed. When an element with the
//! referenced id exists, the viewport animates to bring it to the top;
//! otherwise nothing scrolls.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id referenced by a fragment href. `"#"` alone references nothing.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Wire the click handler onto every fragment anchor.
#[cfg(feature = "browser")]
pub fn init() {
    for anchor in crate::dom::query_all(crate::registry::FRAGMENT_ANCHORS) {
        let target: web_sys::EventTarget = anchor.clone().into();
        crate::dom::on(&target, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href).map(str::to_owned) else {
                return;
            };
            let Some(destination) = crate::dom::document().and_then(|doc| doc.get_element_by_id(&id)) else {
                return;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            destination.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
