//! Page Bindings
//!
//! DOM wiring for server-rendered pages: event listeners, timers and
//! window-level functions that detach themselves when dropped.
//! A `Bindings` set owns everything one page controller installs.

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

/// An event listener that is removed from its target on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("[BIND] addEventListener({}) failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A function published as `window[name]`, deleted on drop
pub struct GlobalFunction {
    name: &'static str,
    _callback: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl GlobalFunction {
    /// Publish a two-argument function on `window`.
    /// Matches inline handlers such as `onchange="fn(id, this)"`.
    pub fn install<F>(name: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(JsValue, JsValue) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut(JsValue, JsValue)>::new(handler);
        js_sys::Reflect::set(&window, &JsValue::from_str(name), callback.as_ref())?;
        Ok(Self {
            name,
            _callback: callback,
        })
    }
}

impl Drop for GlobalFunction {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(self.name));
        }
    }
}

/// Everything a page controller has attached.
///
/// Dropping the set (or calling [`Bindings::dispose`]) removes listeners,
/// cancels pending timeouts and stops intervals.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    timeouts: Vec<Timeout>,
    intervals: Vec<Interval>,
    globals: Vec<GlobalFunction>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` for `event` on `target`
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, handler));
    }

    /// Run `callback` once after `millis`
    pub fn after<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.timeouts.push(Timeout::new(millis, callback));
    }

    /// Run `callback` every `millis` until disposed
    pub fn every<F>(&mut self, millis: u32, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.intervals.push(Interval::new(millis, callback));
    }

    pub fn publish(&mut self, global: GlobalFunction) {
        self.globals.push(global);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn timer_count(&self) -> usize {
        self.timeouts.len() + self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.timer_count() == 0 && self.globals.is_empty()
    }

    pub fn dispose(self) {
        log::debug!(
            "[BIND] disposing {} listeners, {} timers, {} globals",
            self.listeners.len(),
            self.timer_count(),
            self.globals.len()
        );
        drop(self);
    }
}

/// All elements in `document` matching `selector`, in document order.
/// An invalid selector yields no elements.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("[BIND] invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query_all`], keeping only elements that are `T`
pub fn query_all_as<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<T>().ok())
        .collect()
}

/// First element matching `selector`, if any
pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Run `f` once the document has been parsed.
/// Runs immediately when parsing is already done.
pub fn when_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref()) {
        log::warn!("[BIND] could not wait for DOMContentLoaded: {:?}", e);
    }
}
