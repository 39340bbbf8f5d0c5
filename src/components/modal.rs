use super::CloseButton;
use crate::hooks::{use_escape_key, use_focus_trap, use_outside_click};
use crate::utils::{CloseChannel, CloseReason, ModalIds, ModalPosition, ModalSize};
use dioxus::prelude::*;

/// Layout rules for the classes `Modal` renders. Hosts include it once with
/// `document::Stylesheet { href: MODAL_STYLESHEET }`.
pub const MODAL_STYLESHEET: Asset = asset!("/assets/modal.css");

/// Modal dialog: overlay, positioned wrapper, sized container with header,
/// content and an optional footer.
///
/// The close button, the Escape key and a click on the backdrop all call
/// `on_close`; the host closes the modal by no longer rendering it.
#[component]
pub fn Modal(
    #[props(default)] position: ModalPosition,
    size: ModalSize,
    #[props(into)] title: String,
    content: Element,
    #[props(default = true)] has_close_button: bool,
    on_close: EventHandler<()>,
    button_elements: Option<Element>,
) -> Element {
    // Fixed for the lifetime of this mount so re-renders keep the aria bindings
    let ids = use_hook(ModalIds::new);
    let close = CloseChannel::new(on_close);

    let focus_trap = use_focus_trap(&ids.container);
    use_escape_key(close);
    let mut outside_click = use_outside_click(close);

    rsx! {
        div {
            class: "modal-overlay",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "{ids.title}",
            "aria-describedby": "{ids.content}",

            div {
                class: "modal-wrapper {position}",
                onclick: move |_| outside_click.on_wrapper_click(),

                div {
                    id: focus_trap.id().to_string(),
                    class: "modal-container {position} {size}",
                    tabindex: "-1",
                    onclick: move |_| outside_click.on_container_click(),

                    // Header
                    div {
                        class: "modal-header",

                        h2 {
                            id: "{ids.title}",
                            class: "modal-title",
                            "{title}"
                        }

                        div {
                            class: "modal-close-wrapper",
                            if has_close_button {
                                CloseButton {
                                    on_close: move |_| close.notify(CloseReason::CloseButton),
                                }
                            }
                        }
                    }

                    div {
                        id: "{ids.content}",
                        class: "modal-content",
                        {content}
                    }

                    if let Some(buttons) = button_elements {
                        div {
                            class: "modal-footer",
                            {buttons}
                        }
                    }
                }
            }
        }
    }
}
