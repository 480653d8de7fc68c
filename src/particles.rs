use crate::constants::CANVAS_ID;
use crate::core::particles::scatter_positions;
use crate::core::{
    Camera, FieldMotion, FrameClock, FrameLayer, LayerStatus, ParticleMaterial, PointerState,
    PARTICLE_COUNT,
};
use crate::dom;
use crate::render::GpuState;
use crate::stage::Stage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

struct ParticleLayer {
    gpu: GpuState<'static>,
    canvas: web::HtmlCanvasElement,
    camera: Camera,
    motion: FieldMotion,
    pointer: Rc<RefCell<PointerState>>,
    material: Rc<RefCell<ParticleMaterial>>,
    viewport: Rc<Cell<(f64, f64)>>,
}

impl FrameLayer for ParticleLayer {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn update(&mut self, clock: &FrameClock) -> LayerStatus {
        let target = self.pointer.borrow().target;
        self.motion.step(clock.elapsed_sec(), target);

        let (vw, vh) = self.viewport.get();
        self.camera.resize(vw, vh);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let material = *self.material.borrow();
        if let Err(e) = self
            .gpu
            .render(&self.camera, self.motion.model_matrix(), &material)
        {
            log::error!("render error: {:?}", e);
        }
        LayerStatus::Running
    }
}

fn webgpu_available(window: &web::Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("gpu")).unwrap_or(false)
}

/// Look up the canvas, bring up WebGPU and register the particle layer.
/// Any failure is logged and leaves the rest of the page untouched.
pub async fn install(stage: Stage) {
    let canvas = match stage
        .document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => {
            log::error!("missing #{}; particle field disabled", CANVAS_ID);
            return;
        }
    };
    if !webgpu_available(&stage.window) {
        log::warn!("WebGPU not available; particle field disabled");
        return;
    }

    let viewport = Rc::new(Cell::new(dom::sync_canvas_to_viewport(&canvas)));
    wire_resize(&stage, &canvas, &viewport);

    let positions = scatter_positions(&mut rand::thread_rng(), PARTICLE_COUNT);
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = match GpuState::new(leaked_canvas, &positions).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            return;
        }
    };

    let (vw, vh) = viewport.get();
    let mut camera = Camera::default();
    camera.resize(vw, vh);
    stage.scheduler.borrow_mut().add(Box::new(ParticleLayer {
        gpu,
        canvas: canvas.clone(),
        camera,
        motion: FieldMotion::default(),
        pointer: stage.pointer.clone(),
        material: stage.material.clone(),
        viewport,
    }));

    dom::set_style(&canvas, "opacity", "1");
    log::info!("[particles] {} points", PARTICLE_COUNT);
}

fn wire_resize(stage: &Stage, canvas: &web::HtmlCanvasElement, viewport: &Rc<Cell<(f64, f64)>>) {
    let canvas = canvas.clone();
    let viewport = viewport.clone();
    dom::listen(stage.window_target(), "resize", move |_: web::Event| {
        viewport.set(dom::sync_canvas_to_viewport(&canvas));
    });
}
