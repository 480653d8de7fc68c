use crate::core::particles::pointer_target;
use crate::dom;
use crate::stage::Stage;
use glam::Vec2;
use web_sys as web;

/// Record every mouse move in the shared pointer state: raw client position
/// for the cursor, normalized target for the particle parallax.
pub fn wire_pointermove(stage: &Stage) {
    let pointer = stage.pointer.clone();
    let window = stage.window.clone();
    dom::listen(stage.window_target(), "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport_size(&window);
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let mut p = pointer.borrow_mut();
        p.client = Vec2::new(x, y);
        p.target = pointer_target(x, y, w as f32, h as f32);
    });
}
