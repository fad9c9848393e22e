//! Visibility state machine for one modal element.
//!
//! The toggler deliberately avoids referencing any DOM or platform types: it
//! holds a backdrop handle of a generic, comparable type and exposes the
//! operations an external event dispatcher invokes. The web frontend binds it
//! to real elements; tests drive it with plain values.

/// Show/hide state of the modal element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Hidden,
    Visible,
}

impl DisplayState {
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, DisplayState::Visible)
    }
}

/// Two-state machine dispatching open/close/outside-click events.
///
/// `H` is the handle used for the outside-click check: a document-wide click
/// closes the modal only when its target compares equal to the backdrop
/// handle captured at construction time. Clicks on content nested inside the
/// modal carry a different target and leave it open.
#[derive(Clone, Debug)]
pub struct ModalToggler<H> {
    backdrop: H,
    display: DisplayState,
}

impl<H: PartialEq> ModalToggler<H> {
    /// Build a toggler starting hidden.
    pub fn new(backdrop: H) -> Self {
        Self::with_display(backdrop, DisplayState::Hidden)
    }

    /// Build a toggler with the initial state the hosting markup declares.
    pub fn with_display(backdrop: H, display: DisplayState) -> Self {
        Self { backdrop, display }
    }

    #[inline]
    pub fn display(&self) -> DisplayState {
        self.display
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.display.is_visible()
    }

    /// Open-control activation. Returns whether the state changed; a second
    /// activation while visible is a no-op.
    pub fn open(&mut self) -> bool {
        self.set_display(DisplayState::Visible)
    }

    /// Close-control activation. No-op while already hidden.
    pub fn close(&mut self) -> bool {
        self.set_display(DisplayState::Hidden)
    }

    /// Document-wide click. Closes only on strict target equality with the
    /// backdrop, never on a geometric bounds check.
    pub fn handle_outside_click(&mut self, target: &H) -> bool {
        if *target == self.backdrop {
            self.close()
        } else {
            false
        }
    }

    fn set_display(&mut self, next: DisplayState) -> bool {
        if self.display == next {
            return false;
        }
        self.display = next;
        true
    }
}
