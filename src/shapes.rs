use crate::constants::{SHAPES_CONTAINER_ID, SHAPE_CLASS};
use crate::core::shapes::{
    container_parallax, container_parallax_css, random_motion, random_style, ShapeMotion,
    ShapeStyle,
};
use crate::core::{FrameClock, FrameLayer, LayerStatus, Theme, ThemeChange, SHAPE_COUNT};
use crate::dom;
use crate::stage::Stage;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Shape {
    el: web::HtmlElement,
    style: ShapeStyle,
    motion: ShapeMotion,
}

impl Shape {
    fn paint_theme(&self, theme: Theme) {
        dom::set_styles(&self.el, &self.style.theme_declarations(theme));
    }
}

struct ShapeLayer {
    shapes: Rc<Vec<Shape>>,
}

impl FrameLayer for ShapeLayer {
    fn name(&self) -> &'static str {
        "shapes"
    }

    fn update(&mut self, clock: &FrameClock) -> LayerStatus {
        for shape in self.shapes.iter() {
            let t = shape.motion.sample(clock.elapsed_ms);
            dom::set_style(&shape.el, "transform", &t.to_css());
        }
        LayerStatus::Running
    }
}

fn create_container(document: &web::Document) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_id(SHAPES_CONTAINER_ID);
    dom::set_styles(
        &el,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("z-index", "0"),
            ("pointer-events", "none"),
            ("overflow", "hidden"),
        ],
    );
    Some(el)
}

fn create_shape<R: rand::Rng>(document: &web::Document, rng: &mut R) -> Option<Shape> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let style = random_style(rng);
    let motion = random_motion(rng);
    dom::set_styles(&el, &style.declarations());
    _ = el.class_list().add_1(SHAPE_CLASS);
    if !style.placement.accepted {
        log::debug!(
            "[shapes] kept fallback position after {} attempts",
            style.placement.attempts
        );
    }
    Some(Shape { el, style, motion })
}

/// Spawn the floating shapes, animate them from the frame scheduler and
/// recolour them on theme changes.
pub fn install(stage: &Stage) {
    let Some(container) = create_container(&stage.document) else {
        log::error!("[shapes] could not create container");
        return;
    };
    if let Err(e) = stage.body.append_child(&container) {
        log::error!("[shapes] append container failed: {:?}", e);
        return;
    }

    let mut rng = rand::thread_rng();
    let current = stage.theme.borrow().theme();
    let mut shapes = Vec::with_capacity(SHAPE_COUNT);
    for _ in 0..SHAPE_COUNT {
        let Some(shape) = create_shape(&stage.document, &mut rng) else {
            continue;
        };
        if current.is_neo() {
            shape.paint_theme(current);
        }
        _ = container.append_child(&shape.el);
        shapes.push(shape);
    }
    let shapes = Rc::new(shapes);

    let recolor = shapes.clone();
    stage
        .theme
        .borrow_mut()
        .subscribe(move |change: &ThemeChange| {
            for shape in recolor.iter() {
                shape.paint_theme(change.theme);
            }
        });

    wire_parallax(stage, &container);
    stage
        .scheduler
        .borrow_mut()
        .add(Box::new(ShapeLayer { shapes: shapes.clone() }));
    log::info!("[shapes] {} spawned", shapes.len());
}

fn wire_parallax(stage: &Stage, container: &web::HtmlElement) {
    let container = container.clone();
    dom::listen(
        stage.window_target(),
        "deviceorientation",
        move |ev: web::DeviceOrientationEvent| {
            if let Some((x, y)) = container_parallax(ev.gamma(), ev.beta()) {
                dom::set_styles(
                    &container,
                    &[
                        ("transform", container_parallax_css(x, y)),
                        ("transition", "transform 0.5s ease-out".to_string()),
                    ],
                );
            }
        },
    );
}
