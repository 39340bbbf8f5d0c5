mod escape_key;
mod focus_trap;
mod listener;
mod outside_click;

pub use escape_key::{is_escape_key, use_escape_key, ESCAPE_KEYS};
pub use focus_trap::{use_focus_trap, FocusTrap};
pub use listener::{use_keydown_listener, KeyPress};
pub use outside_click::{use_outside_click, ClickOrigin, OutsideClick};
