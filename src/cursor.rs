use crate::constants::{
    CURSOR_DOT_SELECTOR, CURSOR_OUTLINE_SELECTOR, HOVERING_BODY_CLASS, MAGNET_SELECTOR,
    TILT_SELECTOR,
};
use crate::core::interaction::{magnetic_offset, tilt_angles, tilt_css, tilt_neutral_css, Trail};
use crate::core::{FrameClock, FrameLayer, LayerStatus, PointerState};
use crate::dom;
use crate::stage::Stage;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Outline element easing toward the pointer every frame, moving or not.
struct TrailLayer {
    outline: web::HtmlElement,
    trail: Trail,
    pointer: Rc<RefCell<PointerState>>,
}

impl FrameLayer for TrailLayer {
    fn name(&self) -> &'static str {
        "cursor-trail"
    }

    fn update(&mut self, _clock: &FrameClock) -> LayerStatus {
        let target = self.pointer.borrow().client;
        let pos = self.trail.step(target);
        dom::set_style(&self.outline, "left", &format!("{}px", pos.x));
        dom::set_style(&self.outline, "top", &format!("{}px", pos.y));
        LayerStatus::Running
    }
}

#[inline]
fn rect_center(rect: &web::DomRect) -> Vec2 {
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}

/// Custom cursor and magnetic elements; both need the dot and outline
/// elements to be present. Tilt cards are wired independently.
pub fn install(stage: &Stage) {
    wire_tilt_cards(stage);

    let dot = dom::query_html(&stage.document, CURSOR_DOT_SELECTOR);
    let outline = dom::query_html(&stage.document, CURSOR_OUTLINE_SELECTOR);
    let (Some(dot), Some(outline)) = (dot, outline) else {
        log::info!("[cursor] no cursor elements; custom cursor off");
        return;
    };

    dom::listen(stage.window_target(), "mousemove", move |ev: web::MouseEvent| {
        dom::set_style(&dot, "left", &format!("{}px", ev.client_x()));
        dom::set_style(&dot, "top", &format!("{}px", ev.client_y()));
    });

    stage.scheduler.borrow_mut().add(Box::new(TrailLayer {
        outline,
        trail: Trail::default(),
        pointer: stage.pointer.clone(),
    }));

    wire_magnets(stage);
    log::info!("[cursor] installed");
}

fn wire_magnets(stage: &Stage) {
    for el in dom::query_all(&stage.document, MAGNET_SELECTOR) {
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        let target = el.clone();
        let body = stage.body.clone();
        dom::listen(el.as_ref(), "mousemove", move |ev: web::MouseEvent| {
            let center = rect_center(&target.get_bounding_client_rect());
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let offset = magnetic_offset(pointer, center);
            dom::set_style(
                &target,
                "transform",
                &format!("translate({}px, {}px)", offset.x, offset.y),
            );
            _ = body.class_list().add_1(HOVERING_BODY_CLASS);
        });

        let target = el.clone();
        let body = stage.body.clone();
        dom::listen(el.as_ref(), "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", "translate(0, 0)");
            _ = body.class_list().remove_1(HOVERING_BODY_CLASS);
        });
    }
}

fn wire_tilt_cards(stage: &Stage) {
    for card in dom::query_all(&stage.document, TILT_SELECTOR) {
        let Ok(card) = card.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        let target = card.clone();
        dom::listen(card.as_ref(), "mousemove", move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = (ev.client_x() as f64 - rect.left()) as f32;
            let y = (ev.client_y() as f64 - rect.top()) as f32;
            let (rx, ry) = tilt_angles(x, y, rect.width() as f32, rect.height() as f32);
            dom::set_style(&target, "transform", &tilt_css(rx, ry));
        });

        let target = card.clone();
        dom::listen(card.as_ref(), "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", &tilt_neutral_css());
        });
    }
}
