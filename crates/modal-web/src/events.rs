use crate::constants::{CLOSE_BUTTON_ID, MODAL_ID, OPEN_BUTTON_ID};
use crate::{dom, modal};
use modal_core::{DisplayState, ModalToggler, WireError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedToggler = Rc<RefCell<ModalToggler<web::Element>>>;

/// Attach the three click listeners. All contract elements are resolved up
/// front, so a missing one aborts the remaining attachments in this pass.
pub fn wire_modal(document: &web::Document) -> Result<(), WireError> {
    let modal_el = dom::require_element(document, MODAL_ID)?;
    let open_btn = dom::require_element(document, OPEN_BUTTON_ID)?;
    let close_btn = dom::require_element(document, CLOSE_BUTTON_ID)?;

    let toggler: SharedToggler = Rc::new(RefCell::new(ModalToggler::new(modal_el.clone())));

    wire_open_control(&open_btn, &toggler, &modal_el);
    wire_close_control(&close_btn, &toggler, &modal_el);
    wire_backdrop_click(&toggler, &modal_el);
    Ok(())
}

fn wire_open_control(button: &web::Element, toggler: &SharedToggler, modal_el: &web::Element) {
    let toggler = toggler.clone();
    let modal_el = modal_el.clone();
    dom::add_click_listener(button, move || {
        if toggler.borrow_mut().open() {
            modal::apply(&modal_el, DisplayState::Visible);
            log::info!("[modal] open");
        } else {
            log::debug!("[modal] open ignored; already visible");
        }
    });
}

fn wire_close_control(button: &web::Element, toggler: &SharedToggler, modal_el: &web::Element) {
    let toggler = toggler.clone();
    let modal_el = modal_el.clone();
    dom::add_click_listener(button, move || {
        if toggler.borrow_mut().close() {
            modal::apply(&modal_el, DisplayState::Hidden);
            log::info!("[modal] close");
        } else {
            log::debug!("[modal] close ignored; already hidden");
        }
    });
}

// Close when a click lands on the backdrop itself. Clicks on content nested
// inside the modal bubble up with a different target and leave it open.
fn wire_backdrop_click(toggler: &SharedToggler, modal_el: &web::Element) {
    let toggler = toggler.clone();
    let modal_el = modal_el.clone();
    dom::add_window_click_listener(move |ev: web::MouseEvent| {
        let Some(target) = ev.target() else {
            return;
        };
        let Ok(target) = target.dyn_into::<web::Element>() else {
            return;
        };
        if toggler.borrow_mut().handle_outside_click(&target) {
            modal::apply(&modal_el, DisplayState::Hidden);
            log::info!("[modal] backdrop click");
        }
    });
}
