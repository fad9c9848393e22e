use modal_core::WireError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a contract element, failing with the offending id.
pub fn require_element(document: &web::Document, id: &str) -> Result<web::Element, WireError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WireError::MissingElement { id: id.to_string() })
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Document-wide click listener, attached to the window so clicks anywhere in
/// the page reach it. The handler receives the event to inspect its target.
#[inline]
pub fn add_window_click_listener(mut handler: impl FnMut(web::MouseEvent) + 'static) {
    if let Some(window) = web::window() {
        let closure =
            Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
