use dioxus::prelude::*;
use modal_kit::{DemoSettings, Modal, ModalConfig, ModalPosition, ModalSize, MODAL_STYLESHEET};

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load the configured modal from disk on startup
    let settings = use_hook(|| {
        DemoSettings::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load demo settings: {}", e);
            DemoSettings::default()
        })
    });

    // Currently open modal, if any
    let mut open_modal = use_signal(|| None::<ModalConfig>);

    // Close requests received; more than one per open is expected when triggers coincide
    let mut close_requests = use_signal(|| 0usize);

    let mut close_modal = move || {
        close_requests += 1;
        open_modal.set(None);
    };

    let configured = settings.modal.clone();

    rsx! {
        document::Stylesheet { href: MODAL_STYLESHEET }

        div {
            style: "font-family: sans-serif; padding: 32px;",

            h1 { "modal-kit" }

            p { "Close requests so far: {close_requests}" }

            button {
                onclick: move |_| open_modal.set(Some(configured.clone())),
                "Open configured modal"
            }

            for position in ModalPosition::all() {
                div {
                    style: "display: flex; gap: 8px; margin-top: 12px;",
                    for size in ModalSize::all() {
                        button {
                            onclick: move |_| {
                                open_modal.set(Some(ModalConfig {
                                    position,
                                    size,
                                    title: format!("{} {}", position.name(), size.name()),
                                    has_close_button: true,
                                }));
                            },
                            "{position.name()} / {size.name()}"
                        }
                    }
                }
            }

            if let Some(config) = open_modal() {
                Modal {
                    position: config.position,
                    size: config.size,
                    title: config.title.clone(),
                    has_close_button: config.has_close_button,
                    on_close: move |_| close_modal(),
                    content: rsx! {
                        p { "This container is {config.size.width_px()}px wide." }
                        input { placeholder: "Tab cycles inside the dialog" }
                    },
                    button_elements: rsx! {
                        button { onclick: move |_| close_modal(), "Cancel" }
                        button { onclick: move |_| close_modal(), "Confirm" }
                    },
                }
            }
        }
    }
}
