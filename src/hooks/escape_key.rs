use super::listener::use_keydown_listener;
use crate::utils::{CloseChannel, CloseReason};

/// `Esc` is still reported by some older engines.
pub static ESCAPE_KEYS: &[&str] = &["Escape", "Esc"];

pub fn is_escape_key(key: &str) -> bool {
    ESCAPE_KEYS.contains(&key)
}

/// Close on every Escape keypress while mounted. No debouncing.
pub fn use_escape_key(close: CloseChannel) {
    use_keydown_listener(ESCAPE_KEYS, false, move |press| async move {
        if is_escape_key(&press.key) {
            close.notify(CloseReason::EscapeKey);
        }
    });
}
