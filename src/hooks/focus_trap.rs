use super::listener::use_keydown_listener;
use crate::utils::focus::{initial_target, next_target, FocusSnapshot, TabDirection};
use crate::utils::scripts;
use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

/// Binding for the trapped container: render the container with `id()`.
#[derive(Clone, PartialEq, Debug)]
pub struct FocusTrap {
    container_id: String,
}

impl FocusTrap {
    pub fn id(&self) -> &str {
        &self.container_id
    }
}

static TAB_KEYS: &[&str] = &["Tab"];

#[derive(Clone)]
struct TrapState {
    container_id: String,
    restore_key: String,
    engaged: Rc<Cell<bool>>,
}

impl TrapState {
    fn new(container_id: String) -> Self {
        Self {
            container_id,
            restore_key: format!("focus-restore-{}", Uuid::new_v4().simple()),
            engaged: Rc::new(Cell::new(false)),
        }
    }

    fn release(&self) {
        if self.engaged.replace(false) {
            document::eval(&scripts::focus_trap_release(&self.restore_key));
            tracing::trace!("focus restored after closing {}", self.container_id);
        }
    }
}

/// Trap keyboard focus inside the element with id `container_id` for as
/// long as the calling component is mounted.
///
/// On mount the previously focused element is remembered and focus moves
/// to the first focusable descendant, or to the container itself when it
/// has none. Tab and Shift+Tab are taken from the whole document, so focus
/// that left the container (a click on the backdrop) is pulled back in.
/// On unmount the remembered element gets focus back.
pub fn use_focus_trap(container_id: &str) -> FocusTrap {
    let state = use_hook(|| TrapState::new(container_id.to_string()));

    use_effect({
        let state = state.clone();
        move || {
            let state = state.clone();
            spawn(async move {
                engage(&state).await;
            });
        }
    });

    let trap = FocusTrap {
        container_id: state.container_id.clone(),
    };

    let container_id = state.container_id.clone();
    use_keydown_listener(TAB_KEYS, true, move |press| {
        let container_id = container_id.clone();
        async move {
            cycle_focus(&container_id, TabDirection::from_shift(press.shift)).await;
        }
    });

    use_drop(move || state.release());

    trap
}

async fn engage(state: &TrapState) {
    let container_id = state.container_id.as_str();
    // Any unmount from here on restores focus
    state.engaged.set(true);
    let count = match document::eval(&scripts::focus_trap_engage(container_id, &state.restore_key))
        .join::<FocusSnapshot>()
        .await
    {
        Ok(snapshot) => snapshot.count,
        Err(e) => {
            tracing::warn!("Failed to inspect modal container {}: {}", container_id, e);
            0
        }
    };

    document::eval(&scripts::focus_move(container_id, initial_target(count)));
}

async fn cycle_focus(container_id: &str, direction: TabDirection) {
    let snapshot = match document::eval(&scripts::focus_snapshot(container_id))
        .join::<FocusSnapshot>()
        .await
    {
        Ok(snapshot) => snapshot,
        Err(e) => {
            // Falls back to the container, which still keeps focus inside
            tracing::warn!("Failed to read focus inside {}: {}", container_id, e);
            FocusSnapshot::default()
        }
    };

    let target = next_target(snapshot, direction);
    tracing::trace!(?snapshot, ?target, "moving focus inside {}", container_id);
    document::eval(&scripts::focus_move(container_id, target));
}
