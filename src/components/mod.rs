mod close_button;
mod modal;

pub use close_button::CloseButton;
pub use modal::{Modal, MODAL_STYLESHEET};
