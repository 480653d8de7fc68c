use crate::constants::{HEADER_SELECTOR, REVEAL_CLASS, REVEAL_SELECTOR, STICKY_CLASS, VISIBLE_CLASS};
use crate::core::interaction::header_is_sticky;
use crate::core::REVEAL_THRESHOLD;
use crate::dom;
use crate::stage::Stage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Mark tracked sections visible the first time they scroll into view.
pub fn install(stage: &Stage) {
    let sections = dom::query_all(&stage.document, REVEAL_SELECTOR);
    for sec in &sections {
        _ = sec.class_list().add_1(REVEAL_CLASS);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                // Unobserving keeps the reveal one-way
                let target = entry.target();
                _ = target.class_list().add_1(VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for sec in &sections {
                observer.observe(sec);
            }
            log::info!("[reveal] observing {} sections", sections.len());
        }
        Err(e) => {
            // Without an observer nothing would ever appear; show everything
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            for sec in &sections {
                _ = sec.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }
    callback.forget();

    wire_sticky_header(stage);
}

fn wire_sticky_header(stage: &Stage) {
    let Some(header) = dom::query_html(&stage.document, HEADER_SELECTOR) else {
        return;
    };
    let window = stage.window.clone();
    dom::listen(stage.window_target(), "scroll", move |_: web::Event| {
        let y = window.scroll_y().unwrap_or(0.0);
        let cl = header.class_list();
        _ = if header_is_sticky(y) {
            cl.add_1(STICKY_CLASS)
        } else {
            cl.remove_1(STICKY_CLASS)
        };
    });
}
