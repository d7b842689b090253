use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade the page loader out, then remove it from layout.
pub fn dismiss_loader(document: &web::Document, loader_id: &str, delay_ms: u32, fade_ms: u32) {
    let Some(el) = document
        .get_element_by_id(loader_id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[loader] #{} not found", loader_id);
        return;
    };
    dom::set_timeout(delay_ms, move || {
        dom::set_style(&el, "opacity", "0");
        dom::set_timeout(fade_ms, move || hide(&el));
    });
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1("hidden");
    // fallback for environments without CSS class
    dom::set_style(el, "display", "none");
}

/// Replace an element's content with an error notice.
pub fn show_error(el: &web::Element, html: &str) {
    el.set_inner_html(html);
}
