//! Container size observation, debounced to frame granularity.
//!
//! The observer only publishes the latest measured size into a shared slot;
//! the frame loop drains it at most once per animation frame, so layout is
//! recomputed at most once per frame no matter how fast resizes arrive.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::events::ListenerSet;

pub struct ViewportTracker {
    observer: Option<web::ResizeObserver>,
    _closure: Option<Closure<dyn FnMut()>>,
}

impl ViewportTracker {
    /// Observe `container` and publish its size into `pending`. Falls back
    /// to window resize events when ResizeObserver is unavailable.
    pub fn wire(
        container: &web::HtmlElement,
        pending: Rc<Cell<Option<(f32, f32)>>>,
        listeners: &mut ListenerSet,
    ) -> Self {
        // Seed the slot so the first frame lays out against the real size.
        pending.set(Some(dom::measure(container)));

        let measured = container.clone();
        let slot = pending.clone();
        let closure = Closure::wrap(Box::new(move || {
            slot.set(Some(dom::measure(&measured)));
        }) as Box<dyn FnMut()>);

        match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(container);
                Self {
                    observer: Some(observer),
                    _closure: Some(closure),
                }
            }
            Err(_) => {
                log::warn!("ResizeObserver unavailable, falling back to window resize");
                if let Some(window) = web::window() {
                    listeners.add(window.unchecked_ref(), "resize", closure);
                    Self {
                        observer: None,
                        _closure: None,
                    }
                } else {
                    Self {
                        observer: None,
                        _closure: Some(closure),
                    }
                }
            }
        }
    }

    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self._closure = None;
    }
}
