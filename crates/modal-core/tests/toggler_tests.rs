// Host-side tests for the visibility state machine and wiring errors.

use modal_core::{DisplayState, ModalToggler, WireError};

const BACKDROP: u32 = 1;
const CONTENT: u32 = 2;

fn make_toggler() -> ModalToggler<u32> {
    ModalToggler::new(BACKDROP)
}

#[test]
fn starts_hidden() {
    let t = make_toggler();
    assert_eq!(t.display(), DisplayState::Hidden);
    assert!(!t.is_visible());
}

#[test]
fn open_shows_hidden_modal() {
    let mut t = make_toggler();
    assert!(t.open());
    assert_eq!(t.display(), DisplayState::Visible);
}

#[test]
fn close_hides_visible_modal() {
    let mut t = make_toggler();
    t.open();
    assert!(t.close());
    assert_eq!(t.display(), DisplayState::Hidden);
}

#[test]
fn open_is_idempotent_while_visible() {
    let mut t = make_toggler();
    assert!(t.open());
    // Second activation is a no-op transition
    assert!(!t.open());
    assert!(t.is_visible());
}

#[test]
fn close_is_idempotent_while_hidden() {
    let mut t = make_toggler();
    assert!(!t.close());
    assert_eq!(t.display(), DisplayState::Hidden);
}

#[test]
fn backdrop_click_hides_visible_modal() {
    let mut t = make_toggler();
    t.open();
    assert!(t.handle_outside_click(&BACKDROP));
    assert_eq!(t.display(), DisplayState::Hidden);
}

#[test]
fn content_click_keeps_modal_visible() {
    let mut t = make_toggler();
    t.open();
    // Clicks strictly inside the modal carry a different target
    assert!(!t.handle_outside_click(&CONTENT));
    assert!(t.is_visible());
}

#[test]
fn backdrop_click_while_hidden_is_a_no_op() {
    let mut t = make_toggler();
    assert!(!t.handle_outside_click(&BACKDROP));
    assert!(!t.handle_outside_click(&CONTENT));
    assert_eq!(t.display(), DisplayState::Hidden);
}

#[test]
fn with_display_honors_markup_initial_state() {
    let t = ModalToggler::with_display(BACKDROP, DisplayState::Visible);
    assert!(t.is_visible());

    let t = ModalToggler::with_display(BACKDROP, DisplayState::Hidden);
    assert!(!t.is_visible());
}

#[test]
fn works_with_reference_handles() {
    // The web frontend hands in element references; mirror that with &str
    let mut t = ModalToggler::new("backdrop");
    t.open();
    assert!(!t.handle_outside_click(&"content"));
    assert!(t.handle_outside_click(&"backdrop"));
    assert_eq!(t.display(), DisplayState::Hidden);
}

#[test]
fn missing_element_error_names_the_id() {
    let err = WireError::MissingElement {
        id: "openModalBtn".to_string(),
    };
    assert_eq!(err.to_string(), "missing #openModalBtn");
}
