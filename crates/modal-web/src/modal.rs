use crate::constants::{DISPLAY_HIDDEN_STYLE, DISPLAY_VISIBLE_STYLE};
use modal_core::DisplayState;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    let _ = el.set_attribute("style", DISPLAY_VISIBLE_STYLE);
}

#[inline]
pub fn hide(el: &web::Element) {
    let _ = el.set_attribute("style", DISPLAY_HIDDEN_STYLE);
}

/// Mirror a toggler transition into the modal element's inline style.
#[inline]
pub fn apply(el: &web::Element, display: DisplayState) {
    match display {
        DisplayState::Visible => show(el),
        DisplayState::Hidden => hide(el),
    }
}
