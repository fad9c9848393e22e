// Hosting-page contract: the element ids looked up at wiring time and the
// inline style values written to the modal element.

pub const OPEN_BUTTON_ID: &str = "openModalBtn";
pub const CLOSE_BUTTON_ID: &str = "closeModalBtn";
pub const MODAL_ID: &str = "modal";

pub const DISPLAY_VISIBLE_STYLE: &str = "display:block";
pub const DISPLAY_HIDDEN_STYLE: &str = "display:none";
