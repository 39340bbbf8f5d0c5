//! In-memory browser for mounting components in unit tests.
//!
//! `FakeBrowser` answers the snippets from `utils::scripts` the way the page
//! would: keydown registrations become channels that `press` feeds, focus
//! snippets read and move a focus index inside one container.

use dioxus::document::{Document, Eval, EvalError, Evaluator};
use dioxus::dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
use dioxus::prelude::*;
use dioxus::signals::{Owner, UnsyncStorage};
use serde_json::{json, Value};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// Number of `on_close` calls seen by a test host.
#[derive(Clone, Default)]
pub(crate) struct CloseCount(Rc<Cell<usize>>);

impl CloseCount {
    pub(crate) fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub(crate) fn get(&self) -> usize {
        self.0.get()
    }
}

struct Channel {
    key: String,
    keys: Vec<String>,
    prevent_default: bool,
    queue: VecDeque<Value>,
    waker: Option<Waker>,
    detached: bool,
}

#[derive(Default)]
struct BrowserState {
    channels: Vec<Rc<RefCell<Channel>>>,
    detached: Vec<String>,
    focusable: usize,
    active: Option<usize>,
    container_focused: bool,
    remembered: bool,
    restored: bool,
}

impl BrowserState {
    fn snapshot(&self) -> Value {
        json!({ "count": self.focusable, "active": self.active })
    }

    fn focus_element(&mut self, index: usize) {
        if index < self.focusable {
            self.active = Some(index);
            self.container_focused = false;
        } else {
            self.focus_container();
        }
    }

    fn focus_container(&mut self) {
        self.active = None;
        self.container_focused = true;
    }
}

#[derive(Clone)]
pub(crate) struct FakeBrowser {
    state: Rc<RefCell<BrowserState>>,
}

impl FakeBrowser {
    /// A page whose modal container holds `focusable` tabbable elements
    pub(crate) fn new(focusable: usize) -> Self {
        let state = BrowserState {
            focusable,
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Root context for `VirtualDom::with_root_context`
    pub(crate) fn document(&self) -> Rc<dyn Document> {
        Rc::new(FakeDocument {
            state: self.state.clone(),
            owner: Owner::default(),
        })
    }

    /// Dispatch a keydown on the document. Returns how many live listeners
    /// matched the key.
    pub(crate) fn press(&self, key: &str, shift: bool) -> usize {
        let state = self.state.borrow();
        let mut reached = 0;
        for channel in &state.channels {
            let mut channel = channel.borrow_mut();
            if channel.detached || !channel.keys.iter().any(|k| k == key) {
                continue;
            }
            channel.queue.push_back(json!({ "key": key, "shift": shift }));
            if let Some(waker) = channel.waker.take() {
                waker.wake();
            }
            reached += 1;
        }
        reached
    }

    /// Move focus out of the container, as a click on the backdrop does
    pub(crate) fn blur(&self) {
        let mut state = self.state.borrow_mut();
        state.active = None;
        state.container_focused = false;
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.state.borrow().active
    }

    pub(crate) fn container_focused(&self) -> bool {
        self.state.borrow().container_focused
    }

    pub(crate) fn remembered(&self) -> bool {
        self.state.borrow().remembered
    }

    pub(crate) fn restored(&self) -> bool {
        self.state.borrow().restored
    }

    /// Keys of every registration attached so far, live or not
    pub(crate) fn listener_keys(&self, key: &str) -> Vec<String> {
        self.state
            .borrow()
            .channels
            .iter()
            .map(|c| c.borrow())
            .filter(|c| c.keys.iter().any(|k| k == key))
            .map(|c| c.key.clone())
            .collect()
    }

    pub(crate) fn prevents_default(&self, registration: &str) -> bool {
        self.state
            .borrow()
            .channels
            .iter()
            .any(|c| c.borrow().key == registration && c.borrow().prevent_default)
    }

    /// How often `registration` was detached
    pub(crate) fn detach_count(&self, registration: &str) -> usize {
        self.state
            .borrow()
            .detached
            .iter()
            .filter(|k| *k == registration)
            .count()
    }
}

struct FakeDocument {
    state: Rc<RefCell<BrowserState>>,
    owner: Owner<UnsyncStorage>,
}

impl Document for FakeDocument {
    fn eval(&self, js: String) -> Eval {
        let mut state = self.state.borrow_mut();

        if js.contains(r#"addEventListener("keydown""#) {
            let channel = Rc::new(RefCell::new(Channel {
                key: declared(&js, "key").as_str().unwrap_or_default().to_string(),
                keys: serde_json::from_value(declared(&js, "keys")).unwrap_or_default(),
                prevent_default: declared(&js, "preventDefault") == Value::Bool(true),
                queue: VecDeque::new(),
                waker: None,
                detached: false,
            }));
            state.channels.push(channel.clone());
            return Eval::new(self.owner.insert(Box::new(ListenerEvaluator { channel })));
        }

        if js.contains("previous.focus()") {
            state.restored = true;
            state.active = None;
            state.container_focused = false;
            return self.finished(Value::Null);
        }

        if js.contains("delete registry[key];") {
            let key = declared(&js, "key").as_str().unwrap_or_default().to_string();
            for channel in &state.channels {
                let mut channel = channel.borrow_mut();
                if channel.key == key {
                    channel.detached = true;
                    if let Some(waker) = channel.waker.take() {
                        waker.wake();
                    }
                }
            }
            state.detached.push(key);
            return self.finished(Value::Null);
        }

        if js.contains("= document.activeElement") {
            state.remembered = true;
            let count = state.focusable;
            return self.finished(json!({ "count": count, "active": null }));
        }

        if js.contains("indexOf(document.activeElement)") {
            let snapshot = state.snapshot();
            return self.finished(snapshot);
        }

        if js.contains("(container).focus()") {
            state.focus_container();
        } else if let Some(index) = moved_to(&js) {
            state.focus_element(index);
        }
        self.finished(Value::Null)
    }
}

impl FakeDocument {
    /// Result computed when the script ran, delivered one poll later like
    /// a round trip to the page.
    fn finished(&self, value: Value) -> Eval {
        Eval::new(self.owner.insert(Box::new(ScriptEvaluator {
            value: Some(value),
            yielded: false,
        })))
    }
}

/// JSON value of `const <name> = ...;` in a generated script
fn declared(js: &str, name: &str) -> Value {
    let marker = format!("const {name} = ");
    js.lines()
        .find_map(|line| line.strip_prefix(&marker))
        .and_then(|rest| rest.strip_suffix(';'))
        .and_then(|literal| serde_json::from_str(literal).ok())
        .unwrap_or(Value::Null)
}

/// Index in `querySelectorAll(...)[i] ?? container`
fn moved_to(js: &str) -> Option<usize> {
    let end = js.find("] ?? container")?;
    let start = js[..end].rfind('[')? + 1;
    js[start..end].parse().ok()
}

struct ListenerEvaluator {
    channel: Rc<RefCell<Channel>>,
}

impl Evaluator for ListenerEvaluator {
    fn send(&self, _data: Value) -> Result<(), EvalError> {
        Err(EvalError::Unsupported)
    }

    fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Result<Value, EvalError>> {
        let mut channel = self.channel.borrow_mut();
        if let Some(value) = channel.queue.pop_front() {
            return Poll::Ready(Ok(value));
        }
        if channel.detached {
            return Poll::Ready(Err(EvalError::Finished));
        }
        channel.waker = Some(cx.waker().clone());
        Poll::Pending
    }

    fn poll_join(&mut self, cx: &mut Context<'_>) -> Poll<Result<Value, EvalError>> {
        self.channel.borrow_mut().waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

struct ScriptEvaluator {
    value: Option<Value>,
    yielded: bool,
}

impl Evaluator for ScriptEvaluator {
    fn send(&self, _data: Value) -> Result<(), EvalError> {
        Err(EvalError::Finished)
    }

    fn poll_recv(&mut self, _cx: &mut Context<'_>) -> Poll<Result<Value, EvalError>> {
        Poll::Ready(Err(EvalError::Finished))
    }

    fn poll_join(&mut self, cx: &mut Context<'_>) -> Poll<Result<Value, EvalError>> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        match self.value.take() {
            Some(value) => Poll::Ready(Ok(value)),
            None => Poll::Ready(Err(EvalError::Finished)),
        }
    }
}

/// Run queued tasks, effects and re-renders until nothing is left
pub(crate) fn settle(dom: &mut VirtualDom) {
    for _ in 0..32 {
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Elements with an `onclick` listener, in creation order
pub(crate) fn click_listeners(mutations: &Mutations) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
            _ => None,
        })
        .collect()
}

/// Bubbling click on `id`
pub(crate) fn click(dom: &mut VirtualDom, id: ElementId) {
    set_event_converter(Box::new(dioxus::html::SerializedHtmlEventConverter));
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, id);
    settle(dom);
}
