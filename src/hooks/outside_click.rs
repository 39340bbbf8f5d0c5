use crate::utils::{CloseChannel, CloseReason};
use dioxus::prelude::*;

/// Tracks whether the click currently bubbling up passed through the
/// container. Reset by every wrapper click, so nothing carries over.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClickOrigin {
    inside: bool,
}

impl ClickOrigin {
    pub fn mark_inside(&mut self) {
        self.inside = true;
    }

    /// True when the click landed on the wrapper itself (the backdrop).
    pub fn take_is_backdrop(&mut self) -> bool {
        !std::mem::take(&mut self.inside)
    }
}

/// Click handlers for the wrapper and the container.
///
/// Inner clicks are not stopped, so hosts still see them; the wrapper just
/// ignores clicks its container already saw.
#[derive(Clone, Copy, PartialEq)]
pub struct OutsideClick {
    origin: Signal<ClickOrigin>,
    close: CloseChannel,
}

impl OutsideClick {
    pub fn on_container_click(&mut self) {
        self.origin.write().mark_inside();
    }

    pub fn on_wrapper_click(&mut self) {
        let is_backdrop = self.origin.write().take_is_backdrop();
        if is_backdrop {
            self.close.notify(CloseReason::OutsideClick);
        }
    }
}

pub fn use_outside_click(close: CloseChannel) -> OutsideClick {
    let origin = use_signal(ClickOrigin::default);
    OutsideClick { origin, close }
}
