use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Set a single inline style property, ignoring failures.
#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

/// Create an HTML element of the given tag.
pub fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}>: {e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("<{tag}> is not an HtmlElement"))
}

/// Current CSS size of an element's content box.
pub fn measure(el: &web::HtmlElement) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}
