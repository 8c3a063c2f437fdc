//! Browser glue: subscription handles that tear themselves down on drop, plus
//! the storage and document-root adapters used by the theme controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
};

use crate::theme::{PreferenceStore, Theme, ThemeSurface, LIGHT_THEME_CLASS};

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// Registers a listener that promises never to call `preventDefault`.
    pub fn passive(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()?;

        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// A pending one-shot timer; dropping it before it fires cancels it.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let mut callback = Some(callback);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;

        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// A single `requestAnimationFrame` callback.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AnimationFrame {
    pub fn request(callback: impl FnOnce() + 'static) -> Option<Self> {
        let mut callback = Some(callback);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let id = window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(self.id);
        }
    }
}

/// Calls `tick` on every animation frame until dropped.
///
/// The frame closure re-requests itself, so it lives in a shared slot; drop
/// cancels the outstanding request and empties the slot to break the cycle.
pub struct FrameLoop {
    slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut() + 'static) -> Option<Self> {
        let win = window()?;
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let next_slot = Rc::clone(&slot);
        let next_pending = Rc::clone(&pending);
        let next_window = win.clone();
        *slot.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            tick();
            let id = next_slot.borrow().as_ref().and_then(|frame| {
                next_window
                    .request_animation_frame(frame.as_ref().unchecked_ref())
                    .ok()
            });
            next_pending.set(id);
        }));

        let id = slot
            .borrow()
            .as_ref()
            .and_then(|frame| win.request_animation_frame(frame.as_ref().unchecked_ref()).ok());
        let Some(id) = id else {
            slot.borrow_mut().take();
            return None;
        };
        pending.set(Some(id));

        Some(Self { slot, pending })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(win), Some(id)) = (window(), self.pending.take()) {
            let _ = win.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}

/// Intersection observer that stops watching each target after its first
/// qualifying intersection.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OneShotObserver {
    /// `on_visible` receives each target that crossed `threshold` and returns
    /// whether it consumed the trigger; consumed targets are unobserved.
    pub fn new(
        threshold: f64,
        mut on_visible: impl FnMut(&Element, bool) -> bool + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if on_visible(&target, entry.is_intersecting()) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// `None` when the media query cannot be evaluated.
pub fn system_prefers_light() -> Option<bool> {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|mq| mq.matches())
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`; reads and writes are silently skipped when unavailable.
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Marks the document root with the light theme class.
pub struct DocumentRootSurface;

impl ThemeSurface for DocumentRootSurface {
    fn apply(&mut self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root
            .class_list()
            .toggle_with_force(LIGHT_THEME_CLASS, theme == Theme::Light);
    }
}
