//! Focus cycling inside a trapped container.
//!
//! The browser side reports how many focusable elements the container has
//! and which of them (if any) is focused; this module decides where focus
//! goes next. Focus never leaves the container: with nothing focusable it
//! stays on the container itself.

use serde::Deserialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }
}

/// Focusable elements of the container at the moment Tab was pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
pub struct FocusSnapshot {
    pub count: usize,
    pub active: Option<usize>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusTarget {
    /// Index into the container's focusable elements, in document order.
    Element(usize),
    Container,
}

pub fn next_target(snapshot: FocusSnapshot, direction: TabDirection) -> FocusTarget {
    let count = snapshot.count;
    if count == 0 {
        return FocusTarget::Container;
    }

    // A stale index (element removed since the snapshot) counts as nothing focused
    let active = snapshot.active.filter(|&i| i < count);

    let index = match (active, direction) {
        (None, TabDirection::Forward) => 0,
        (None, TabDirection::Backward) => count - 1,
        (Some(i), TabDirection::Forward) => (i + 1) % count,
        (Some(i), TabDirection::Backward) => (i + count - 1) % count,
    };

    FocusTarget::Element(index)
}

/// First focus when the trap engages.
pub fn initial_target(count: usize) -> FocusTarget {
    if count == 0 {
        FocusTarget::Container
    } else {
        FocusTarget::Element(0)
    }
}
