//! DOM event wiring: pointer drag, wheel zoom, global keyboard, and per-orb
//! activation. Every listener is recorded in a [`ListenerSet`] so teardown
//! can unregister all of them; nothing may fire after the component is gone.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use galaxy_core::Galaxy;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::analytics;
use crate::render::SceneDom;

/// Registered listeners plus their closures, removable as a unit.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, js_sys::Function)>,
    closures: Vec<Box<dyn Any>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T: ?Sized + 'static>(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<T>,
    ) {
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let _ = target.add_event_listener_with_callback(kind, &function);
        self.entries.push((target.clone(), kind, function));
        self.closures.push(Box::new(closure));
    }

    /// Like `add` but with `passive: false` so the handler may call
    /// `preventDefault` (required for wheel).
    pub fn add_active<T: ?Sized + 'static>(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<T>,
    ) {
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind, &function, &options,
        );
        self.entries.push((target.clone(), kind, function));
        self.closures.push(Box::new(closure));
    }

    pub fn remove_all(&mut self) {
        for (target, kind, function) in self.entries.drain(..) {
            let _ = target.remove_event_listener_with_callback(kind, &function);
        }
        self.closures.clear();
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub galaxy: Rc<RefCell<Galaxy>>,
    pub scene: Rc<SceneDom>,
}

pub fn wire_input_handlers(w: &InputWiring, listeners: &mut ListenerSet) {
    wire_pointerdown(w, listeners);
    wire_pointermove(w, listeners);
    wire_pointerup(w, listeners);
    wire_wheel(w, listeners);
    wire_keydown(w, listeners);
}

fn wire_pointerdown(w: &InputWiring, listeners: &mut ListenerSet) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let began = w.galaxy.borrow_mut().pointer_down(
            ev.pointer_id(),
            ev.button(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        if began {
            // Capture keeps movement outside the bounds tracked; hosts
            // without pointer capture still work via the window listeners.
            let _ = w.container.set_pointer_capture(ev.pointer_id());
            analytics::emit("nebula_drag_start", &[]);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    listeners.add(container.unchecked_ref(), "pointerdown", closure);
}

fn wire_pointermove(w: &InputWiring, listeners: &mut ListenerSet) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut galaxy = w.galaxy.borrow_mut();
        if !galaxy.controller.is_dragging() {
            return;
        }
        galaxy.pointer_move(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        drop(galaxy);
        w.scene.refresh(&w.galaxy.borrow());
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        listeners.add(window.unchecked_ref(), "pointermove", closure);
    }
}

fn wire_pointerup(w: &InputWiring, listeners: &mut ListenerSet) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ended = w.galaxy.borrow_mut().pointer_up(ev.pointer_id());
        if ended {
            let _ = w.container.release_pointer_capture(ev.pointer_id());
            analytics::emit("nebula_drag_end", &[]);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        listeners.add(window.unchecked_ref(), "pointerup", closure);
    }
}

fn wire_wheel(w: &InputWiring, listeners: &mut ListenerSet) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let processed = w
            .galaxy
            .borrow_mut()
            .wheel(ev.delta_y() as f32, js_sys::Date::now());
        if processed {
            ev.prevent_default();
            w.scene.refresh(&w.galaxy.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    listeners.add_active(container.unchecked_ref(), "wheel", closure);
}

// Keys are never preventDefault'ed: arrows and +/- keep their page-level
// meaning (scrolling, zoom) alongside ours, matching the shipped behavior.
fn wire_keydown(w: &InputWiring, listeners: &mut ListenerSet) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        let handled = if key == "Escape" {
            let cleared = w.galaxy.borrow_mut().escape();
            if cleared {
                analytics::emit("nebula_clear", &[]);
            }
            cleared
        } else {
            w.galaxy.borrow_mut().key(&key)
        };
        if handled {
            w.scene.refresh(&w.galaxy.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        listeners.add(window.unchecked_ref(), "keydown", closure);
    }
}

/// Per-orb activation: click selects, double-click and the `c` key toggle
/// compare membership. Enter/Space arrive as clicks via native button
/// semantics, so hit-testing stays a rendering-layer concern.
pub fn wire_orb_handlers(w: &InputWiring, listeners: &mut ListenerSet) {
    let orbs: Vec<(String, web::HtmlElement)> = w.scene.orbs().to_vec();
    for (id, el) in orbs {
        {
            let w = w.clone();
            let id = id.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                if w.galaxy.borrow_mut().click(&id) {
                    analytics::emit("nebula_orb_click", &[("id", &id)]);
                    w.scene.refresh(&w.galaxy.borrow());
                }
            }) as Box<dyn FnMut(_)>);
            listeners.add(el.unchecked_ref(), "click", closure);
        }
        {
            let w = w.clone();
            let id = id.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                ev.stop_propagation();
                if w.galaxy.borrow_mut().compare_toggle(&id) {
                    analytics::emit("nebula_compare_toggle", &[("id", &id)]);
                    w.scene.refresh(&w.galaxy.borrow());
                }
            }) as Box<dyn FnMut(_)>);
            listeners.add(el.unchecked_ref(), "dblclick", closure);
        }
        {
            let w = w.clone();
            let id = id.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.key().eq_ignore_ascii_case("c")
                    && w.galaxy.borrow_mut().compare_toggle(&id)
                {
                    analytics::emit("nebula_compare_toggle", &[("id", &id)]);
                    w.scene.refresh(&w.galaxy.borrow());
                }
            }) as Box<dyn FnMut(_)>);
            listeners.add(el.unchecked_ref(), "keydown", closure);
        }
    }
}

/// Panel buttons: Close clears the selection, Toggle Compare promotes the
/// currently detailed skill into the compare set.
pub fn wire_panel_handlers(w: &InputWiring, listeners: &mut ListenerSet) {
    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            if w.galaxy.borrow_mut().escape() {
                analytics::emit("nebula_clear", &[]);
                w.scene.refresh(&w.galaxy.borrow());
            }
        }) as Box<dyn FnMut(_)>);
        listeners.add(w.scene.close_button().unchecked_ref(), "click", closure);
    }
    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let state = w.galaxy.borrow().selection_state();
            if let galaxy_core::Selection::Selected(id) = state {
                if w.galaxy.borrow_mut().compare_toggle(&id) {
                    analytics::emit("nebula_compare_toggle", &[("id", &id)]);
                    w.scene.refresh(&w.galaxy.borrow());
                }
            }
        }) as Box<dyn FnMut(_)>);
        listeners.add(w.scene.compare_button().unchecked_ref(), "click", closure);
    }
}
