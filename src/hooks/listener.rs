use crate::utils::scripts;
use dioxus::prelude::*;
use serde::Deserialize;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use uuid::Uuid;

/// A key the document listener matched.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub shift: bool,
}

/// One document-level registration owned by a mounted component.
#[derive(Clone, Debug)]
pub(crate) struct ListenerRegistration {
    key: String,
    attached: Rc<Cell<bool>>,
}

impl ListenerRegistration {
    pub(crate) fn new(kind: &str) -> Self {
        Self {
            key: format!("{kind}-{}", Uuid::new_v4().simple()),
            attached: Rc::new(Cell::new(false)),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn mark_attached(&self) {
        self.attached.set(true);
    }

    /// Removes the browser listener. Returns false when nothing was attached
    /// (never mounted in a browser, or already released).
    pub(crate) fn release(&self) -> bool {
        if !self.attached.replace(false) {
            return false;
        }
        document::eval(&scripts::listener_detach(&self.key));
        true
    }
}

/// Listen for `keydown` of any of `keys` on the whole document while the
/// calling component is mounted. With `prevent_default` the browser's own
/// handling of those keys is suppressed.
///
/// The listener is registered once on mount and removed in `use_drop`, so
/// repeated open/close cycles never stack listeners. Presses are handled one
/// at a time: `on_key` for the next press starts only after the previous
/// future finished. The receiving task is owned by the component scope and
/// stops with it.
pub fn use_keydown_listener<F, Fut>(
    keys: &'static [&'static str],
    prevent_default: bool,
    mut on_key: F,
) where
    F: FnMut(KeyPress) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let registration = use_hook(|| ListenerRegistration::new("keydown"));

    use_hook(|| {
        let registration = registration.clone();
        spawn(async move {
            let mut eval = document::eval(&scripts::keydown_listener_attach(
                registration.key(),
                keys,
                prevent_default,
            ));
            registration.mark_attached();

            loop {
                match eval.recv::<KeyPress>().await {
                    Ok(press) => on_key(press).await,
                    Err(e) => {
                        tracing::warn!("keydown listener {} stopped: {}", registration.key(), e);
                        break;
                    }
                }
            }
        })
    });

    use_drop(move || {
        if registration.release() {
            tracing::debug!("released keydown listener {}", registration.key());
        }
    });
}
