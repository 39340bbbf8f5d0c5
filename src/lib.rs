//! Accessible modal dialog component for Dioxus.
//!
//! ```ignore
//! rsx! {
//!     document::Stylesheet { href: MODAL_STYLESHEET }
//!     if open() {
//!         Modal {
//!             size: ModalSize::Small,
//!             position: ModalPosition::Bottom,
//!             title: "Confirm",
//!             content: rsx! { "Are you sure?" },
//!             on_close: move |_| open.set(false),
//!         }
//!     }
//! }
//! ```

pub mod components;
pub mod hooks;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use components::{CloseButton, Modal, MODAL_STYLESHEET};
pub use utils::{
    CloseChannel, CloseReason, DemoSettings, ModalConfig, ModalError, ModalPosition, ModalSize,
};
