//! Reduced-motion preference, re-evaluated live.
//!
//! When the environment exposes the media query, its value is always
//! honored. When it does not, we fail open: losing ambient motion is merely
//! cosmetic, so the default is "motion allowed".

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::events::ListenerSet;

const QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Subscribe to the reduced-motion media query. The returned flag tracks
/// changes for as long as the listeners stay registered.
pub fn watch_reduced_motion(listeners: &mut ListenerSet) -> Rc<Cell<bool>> {
    let flag = Rc::new(Cell::new(false));

    let query = web::window().and_then(|w| w.match_media(QUERY).ok().flatten());
    let Some(query) = query else {
        return flag;
    };
    flag.set(query.matches());

    let flag_on_change = flag.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        flag_on_change.set(ev.matches());
    }) as Box<dyn FnMut(_)>);
    listeners.add(query.unchecked_ref(), "change", closure);

    flag
}
