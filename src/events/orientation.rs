use crate::core::particles::tilt_target;
use crate::dom;
use crate::stage::Stage;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Device tilt steers the particle parallax target. Events without gamma
/// (desktops without sensors) are ignored.
pub fn wire_deviceorientation(stage: &Stage) {
    let pointer = stage.pointer.clone();
    dom::listen(
        stage.window_target(),
        "deviceorientation",
        move |ev: web::DeviceOrientationEvent| {
            if let Some(target) = tilt_target(ev.gamma(), ev.beta()) {
                pointer.borrow_mut().target = target;
            }
        },
    );
}

/// Platforms that gate motion sensors behind a prompt expose
/// `DeviceOrientationEvent.requestPermission`; ask once on the first click.
pub fn wire_permission_request(stage: &Stage) {
    let window = stage.window.clone();
    let fired = std::rc::Rc::new(std::cell::Cell::new(false));
    dom::listen(stage.body.as_ref(), "click", move |_: web::Event| {
        if fired.replace(true) {
            return;
        }
        let Some((ctor, request)) = permission_fn(&window) else {
            return;
        };
        let promise = match request.call0(&ctor) {
            Ok(p) => p,
            Err(e) => {
                log::error!("orientation permission error: {:?}", e);
                return;
            }
        };
        let Ok(promise) = promise.dyn_into::<js_sys::Promise>() else {
            return;
        };
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(state) => log::info!("[orientation] permission {:?}", state.as_string()),
                Err(e) => log::error!("orientation permission error: {:?}", e),
            }
        });
    });
}

fn permission_fn(window: &web::Window) -> Option<(JsValue, js_sys::Function)> {
    let ctor = js_sys::Reflect::get(window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    if ctor.is_undefined() {
        return None;
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    let request = request.dyn_into::<js_sys::Function>().ok()?;
    Some((ctor, request))
}
