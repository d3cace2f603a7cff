//! Fire-and-forget analytics bridge.
//!
//! Prefers a `dataLayer` array, falls back to a `gtag` function, then to a
//! debug log line. Every failure is swallowed; emitting must never throw,
//! block or alter core behavior.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

pub fn emit(event: &str, props: &[(&str, &str)]) {
    if push_data_layer(event, props).is_some() {
        return;
    }
    if call_gtag(event, props).is_some() {
        return;
    }
    log::debug!("analytics {event} {props:?}");
}

fn props_object(event: Option<&str>, props: &[(&str, &str)]) -> js_sys::Object {
    let obj = js_sys::Object::new();
    if let Some(event) = event {
        let _ = js_sys::Reflect::set(&obj, &JsValue::from_str("event"), &JsValue::from_str(event));
    }
    for (k, v) in props {
        let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(k), &JsValue::from_str(v));
    }
    obj
}

fn push_data_layer(event: &str, props: &[(&str, &str)]) -> Option<()> {
    let global = js_sys::global();
    let layer = js_sys::Reflect::get(&global, &JsValue::from_str("dataLayer")).ok()?;
    let layer: js_sys::Array = layer.dyn_into().ok()?;
    layer.push(&props_object(Some(event), props));
    Some(())
}

fn call_gtag(event: &str, props: &[(&str, &str)]) -> Option<()> {
    let global = js_sys::global();
    let gtag = js_sys::Reflect::get(&global, &JsValue::from_str("gtag")).ok()?;
    let gtag: js_sys::Function = gtag.dyn_into().ok()?;
    gtag.call3(
        &global,
        &JsValue::from_str("event"),
        &JsValue::from_str(event),
        &props_object(None, props),
    )
    .ok()?;
    Some(())
}
