use dioxus::prelude::*;
use std::fmt;

/// Which gesture asked the modal to close.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseReason {
    CloseButton,
    EscapeKey,
    OutsideClick,
}

impl CloseReason {
    pub fn name(&self) -> &'static str {
        match self {
            CloseReason::CloseButton => "close button",
            CloseReason::EscapeKey => "escape key",
            CloseReason::OutsideClick => "outside click",
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single path from every close trigger to the host's `on_close`.
///
/// Triggers are not deduplicated: two gestures in the same tick call the
/// handler twice, so hosts should make closing idempotent.
#[derive(Clone, Copy, PartialEq)]
pub struct CloseChannel {
    on_close: EventHandler<()>,
}

impl CloseChannel {
    pub fn new(on_close: EventHandler<()>) -> Self {
        Self { on_close }
    }

    pub fn notify(&self, reason: CloseReason) {
        tracing::debug!(%reason, "modal close requested");
        self.on_close.call(());
    }
}
