#![cfg(target_arch = "wasm32")]
//! WASM entry point: builds the skill galaxy inside `#skill-galaxy` and
//! wires resize, input, reduced-motion and the animation loop to the
//! headless core.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use galaxy_core::{sample_skills, Galaxy, SkillStore};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod analytics;
mod dom;
mod events;
mod frame;
mod motion;
mod render;
mod viewport;

const CONTAINER_ID: &str = "skill-galaxy";

struct AppHandle {
    galaxy: Rc<RefCell<Galaxy>>,
    listeners: events::ListenerSet,
    viewport: viewport::ViewportTracker,
    loop_handle: frame::LoopHandle,
}

thread_local! {
    static APP: RefCell<Option<AppHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: web::HtmlElement = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CONTAINER_ID}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{CONTAINER_ID} is not an HtmlElement"))?;

    let store = SkillStore::new(sample_skills())?;
    let (width, height) = dom::measure(&container);
    let galaxy = Rc::new(RefCell::new(Galaxy::new(store, width, height)));
    log::info!(
        "[galaxy] {} skills, viewport {width:.0}x{height:.0}",
        galaxy.borrow().store().len()
    );

    let scene = Rc::new(render::SceneDom::build(
        &document,
        &container,
        &galaxy.borrow(),
    )?);

    let mut listeners = events::ListenerSet::new();
    let reduced_motion = motion::watch_reduced_motion(&mut listeners);
    let pending_resize: Rc<Cell<Option<(f32, f32)>>> = Rc::new(Cell::new(None));
    let viewport = viewport::ViewportTracker::wire(&container, pending_resize.clone(), &mut listeners);

    let wiring = events::InputWiring {
        container,
        galaxy: galaxy.clone(),
        scene: scene.clone(),
    };
    events::wire_input_handlers(&wiring, &mut listeners);
    events::wire_orb_handlers(&wiring, &mut listeners);
    events::wire_panel_handlers(&wiring, &mut listeners);

    scene.refresh(&galaxy.borrow());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        galaxy: galaxy.clone(),
        scene,
        reduced_motion,
        pending_resize,
        last_instant: Instant::now(),
    }));
    let loop_handle = frame::start_loop(frame_ctx);

    APP.with(|app| {
        *app.borrow_mut() = Some(AppHandle {
            galaxy,
            listeners,
            viewport,
            loop_handle,
        });
    });
    Ok(())
}

/// Tear the component down: cancel the animation loop, unregister every
/// listener and disable the core so stale callbacks cannot mutate state.
#[wasm_bindgen]
pub fn destroy_skill_galaxy() {
    let handle = APP.with(|app| app.borrow_mut().take());
    let Some(mut handle) = handle else {
        return;
    };
    handle.loop_handle.cancel();
    handle.listeners.remove_all();
    handle.viewport.disconnect();
    handle.galaxy.borrow_mut().teardown();
    log::info!("galaxy-web destroyed");
}
