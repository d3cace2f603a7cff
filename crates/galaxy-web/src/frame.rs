//! requestAnimationFrame loop driving ambient rotation, debounced re-layout
//! and the per-frame DOM refresh.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use galaxy_core::Galaxy;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::SceneDom;

pub struct FrameContext {
    pub galaxy: Rc<RefCell<Galaxy>>,
    pub scene: Rc<SceneDom>,
    pub reduced_motion: Rc<Cell<bool>>,
    pub pending_resize: Rc<Cell<Option<(f32, f32)>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        {
            let mut galaxy = self.galaxy.borrow_mut();
            // At most one layout recomputation per frame.
            if let Some((w, h)) = self.pending_resize.take() {
                galaxy.resize(w, h);
            }
            galaxy.tick(dt, self.reduced_motion.get());
        }
        self.scene.refresh(&self.galaxy.borrow());
    }
}

/// Cancels the loop and marks any already-queued callback as a no-op.
pub struct LoopHandle {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(window) = web::window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            // Stale callback queued before teardown.
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(window) = web::window() {
            if let Ok(id) = window.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .expect("tick closure installed above")
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        if let Ok(id) = window.request_animation_frame(
            tick.borrow()
                .as_ref()
                .expect("tick closure installed above")
                .as_ref()
                .unchecked_ref(),
        ) {
            raf_id.set(id);
        }
    }
    // The Rc cycle through `tick_clone` keeps the closure alive for as long
    // as the loop reschedules itself; the alive flag gates execution.
    LoopHandle { alive, raf_id }
}
