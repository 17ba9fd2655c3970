#![cfg(feature = "browser")]
//! Thin web-sys glue shared by the enhancement modules.
//!
//! Every helper here is best-effort: missing documents, failed casts, and
//! rejected DOM calls degrade to no-ops or `None`, never to a panic. The
//! listeners registered here live for the lifetime of the page, so the
//! closures are intentionally leaked with `Closure::forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, CssStyleDeclaration, Element, EventTarget};

/// Current document, if running in a browser window.
#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&nodes)
}

/// All elements matching `selector` under `root`.
#[must_use]
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&nodes)
}

fn collect_elements(nodes: &web_sys::NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// Attach a page-lifetime event listener.
pub fn on(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a listener that fires at most once and then unregisters itself.
pub fn on_once(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Attach a page-lifetime keyboard listener.
pub fn on_key(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::KeyboardEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Inline style declaration of `el`, when it is an HTML element.
#[must_use]
pub fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    el.dyn_ref::<web_sys::HtmlElement>().map(web_sys::HtmlElement::style)
}

/// Set one inline style property, best-effort.
pub fn set_inline(el: &Element, property: &str, value: &str) {
    if let Some(style) = inline_style(el) {
        let _ = style.set_property(property, value);
    }
}

/// Current inline value of one style property, empty when unset.
#[must_use]
pub fn inline_value(el: &Element, property: &str) -> String {
    inline_style(el)
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default()
}

/// Current value of a form field (input, textarea, or select).
#[must_use]
pub fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(area.value());
    }
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

/// Select the full text of a text-entry field.
pub fn select_field_text(el: &Element) {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.select();
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.select();
    }
}

/// Best-effort copy of `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}
