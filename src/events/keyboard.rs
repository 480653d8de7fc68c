use crate::dom;
use crate::stage::Stage;
use web_sys as web;

/// Feed every key name into the theme switch's secret-code buffer.
pub fn wire_secret_keys(stage: &Stage) {
    let theme = stage.theme.clone();
    dom::listen(stage.window_target(), "keydown", move |ev: web::KeyboardEvent| {
        if let Some(change) = theme.borrow_mut().on_key(&ev.key()) {
            log::info!("[keys] theme -> {:?}", change.theme);
        }
    });
}
