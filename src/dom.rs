use crate::core::MAX_PIXEL_RATIO;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector`, in document order. An invalid selector
/// is logged and yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

pub fn set_styles<S: AsRef<str>>(el: &web::HtmlElement, declarations: &[(&str, S)]) {
    let style = el.style();
    for (name, value) in declarations {
        _ = style.set_property(name, value.as_ref());
    }
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Attach a listener for the page lifetime.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

/// Run `f` once on the next animation frame.
pub fn next_frame(window: &web::Window, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    _ = window.request_animation_frame(cb.unchecked_ref());
}

/// Size the canvas to the viewport, with the backing store scaled by the
/// device pixel ratio (capped). Returns the CSS size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let (css_w, css_h) = viewport_size(&w);
    let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
    set_style(canvas, "width", &format!("{css_w}px"));
    set_style(canvas, "height", &format!("{css_h}px"));
    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    (css_w, css_h)
}
