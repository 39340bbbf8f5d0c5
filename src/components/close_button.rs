use dioxus::prelude::*;

#[component]
pub fn CloseButton(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "modal-close-button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "✕"
        }
    }
}
