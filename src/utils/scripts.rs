//! Browser snippets run through `document::eval`.
//!
//! Every registration is stored in `window.__modalKit` under a key owned by
//! one mounted modal, so that the matching teardown snippet can find and
//! release exactly that registration.

use super::focus::FocusTarget;
use serde_json::Value;

/// Elements reachable with Tab, in document order.
pub const FOCUSABLE_SELECTOR: &str = concat!(
    "a[href], area[href], button:not([disabled]), ",
    "input:not([disabled]):not([type=\"hidden\"]), select:not([disabled]), ",
    "textarea:not([disabled]), iframe, [contenteditable=\"true\"], ",
    "[tabindex]:not([tabindex=\"-1\"])"
);

const REGISTRY: &str = "const registry = (window.__modalKit ??= {});";

/// Quote a Rust string as a JS string literal
fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Forward every `keydown` whose key is one of `keys` to the Rust side as
/// `{ key, shift }`. Replaces an earlier registration under the same key.
pub fn keydown_listener_attach(key: &str, keys: &[&str], prevent_default: bool) -> String {
    let key = js_string(key);
    let keys = Value::from(keys.to_vec()).to_string();
    format!(
        r#"{REGISTRY}
const key = {key};
const keys = {keys};
const preventDefault = {prevent_default};
registry[key]?.abort();
const controller = new AbortController();
registry[key] = controller;
document.addEventListener("keydown", (event) => {{
    if (keys.includes(event.key)) {{
        if (preventDefault) {{
            event.preventDefault();
        }}
        dioxus.send({{ key: event.key, shift: event.shiftKey }});
    }}
}}, {{ signal: controller.signal }});"#
    )
}

pub fn listener_detach(key: &str) -> String {
    let key = js_string(key);
    format!(
        r#"{REGISTRY}
const key = {key};
registry[key]?.abort();
delete registry[key];"#
    )
}

/// Remember the focused element under `restore_key` and report the
/// container's focusable count.
pub fn focus_trap_engage(container_id: &str, restore_key: &str) -> String {
    let id = js_string(container_id);
    let restore_key = js_string(restore_key);
    let selector = js_string(FOCUSABLE_SELECTOR);
    format!(
        r#"{REGISTRY}
registry[{restore_key}] = document.activeElement;
const container = document.getElementById({id});
if (!container) return {{ count: 0, active: null }};
return {{ count: container.querySelectorAll({selector}).length, active: null }};"#
    )
}

pub fn focus_snapshot(container_id: &str) -> String {
    let id = js_string(container_id);
    let selector = js_string(FOCUSABLE_SELECTOR);
    format!(
        r#"const container = document.getElementById({id});
if (!container) return {{ count: 0, active: null }};
const focusable = Array.from(container.querySelectorAll({selector}));
const index = focusable.indexOf(document.activeElement);
return {{ count: focusable.length, active: index < 0 ? null : index }};"#
    )
}

pub fn focus_move(container_id: &str, target: FocusTarget) -> String {
    let id = js_string(container_id);
    let selector = js_string(FOCUSABLE_SELECTOR);
    let pick = match target {
        FocusTarget::Element(index) => {
            format!("container.querySelectorAll({selector})[{index}] ?? container")
        }
        FocusTarget::Container => "container".to_string(),
    };
    format!(
        r#"const container = document.getElementById({id});
if (container) {{
    ({pick}).focus();
}}"#
    )
}

/// Re-focus whatever was focused before the trap engaged, if it still exists.
pub fn focus_trap_release(restore_key: &str) -> String {
    let restore_key = js_string(restore_key);
    format!(
        r#"{REGISTRY}
const previous = registry[{restore_key}];
delete registry[{restore_key}];
if (previous && previous.isConnected && typeof previous.focus === "function") {{
    previous.focus();
}}"#
    )
}
