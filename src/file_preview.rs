//! Local image preview for file inputs.
//!
//! On change, the first selected file is read as a data URL when its declared
//! media type is an image. The preview block is inserted next to the input,
//! replacing any previous one, so each input shows at most one preview.
//! Non-image files and empty selections produce no preview and no error.

#[cfg(test)]
#[path = "file_preview_test.rs"]
mod file_preview_test;

/// Whether a declared media type is renderable as an image preview.
#[must_use]
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Markup of the preview block body for a rendered data URL.
#[must_use]
pub fn preview_markup(data_url: &str) -> String {
    // Data URLs carry no quotes; escape anyway since this lands in innerHTML.
    let src = data_url.replace('"', "&quot;");
    format!("<p>Preview:</p><img src=\"{src}\" alt=\"Preview\" class=\"icon-preview\">")
}

/// Inline style pairs applied to the preview block.
#[must_use]
pub fn preview_style() -> [(&'static str, &'static str); 4] {
    [
        ("margin-top", "10px"),
        ("padding", "10px"),
        ("background", "var(--bg-secondary)"),
        ("border-radius", "8px"),
    ]
}

/// Wire the change handler onto every file input.
#[cfg(feature = "browser")]
pub fn init() {
    use wasm_bindgen::JsCast;

    for input in crate::dom::query_all(crate::registry::FILE_INPUTS) {
        let target: web_sys::EventTarget = input.clone().into();
        crate::dom::on(&target, "change", move |_| {
            let Some(file) = input
                .dyn_ref::<web_sys::HtmlInputElement>()
                .and_then(web_sys::HtmlInputElement::files)
                .and_then(|files| files.get(0))
            else {
                return;
            };
            if !is_image(&file.type_()) {
                return;
            }
            read_and_render(&input, &file);
        });
    }
}

#[cfg(feature = "browser")]
fn read_and_render(input: &web_sys::Element, file: &web_sys::File) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let input = input.clone();
    let reader_for_result = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(data_url) = reader_for_result.result().ok().and_then(|v| v.as_string()) {
            render_preview(&input, &data_url);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    let _ = reader.read_as_data_url(file);
}

#[cfg(feature = "browser")]
fn render_preview(input: &web_sys::Element, data_url: &str) {
    let Some(parent) = input.parent_element() else {
        return;
    };

    // Replace, never stack: one preview per input.
    let existing_selector = format!(".{}", crate::registry::FILE_PREVIEW_CLASS);
    if let Ok(Some(existing)) = parent.query_selector(&existing_selector) {
        existing.remove();
    }

    let Some(doc) = crate::dom::document() else {
        return;
    };
    let Ok(preview) = doc.create_element("div") else {
        return;
    };
    preview.set_class_name(crate::registry::FILE_PREVIEW_CLASS);
    preview.set_inner_html(&preview_markup(data_url));
    for (property, value) in preview_style() {
        crate::dom::set_inline(&preview, property, value);
    }
    let _ = parent.append_child(&preview);
}
