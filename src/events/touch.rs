use crate::dom;
use crate::stage::Stage;
use web_sys as web;

/// Triple tap anywhere toggles the theme.
pub fn wire_triple_tap(stage: &Stage) {
    let theme = stage.theme.clone();
    dom::listen(stage.document_target(), "touchend", move |_: web::TouchEvent| {
        let now = js_sys::Date::now();
        if let Some(change) = theme.borrow_mut().on_tap(now) {
            log::info!("[taps] theme -> {:?}", change.theme);
        }
    });
}
