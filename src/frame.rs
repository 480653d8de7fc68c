use crate::core::Scheduler;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives the scheduler from a single `requestAnimationFrame` chain that
/// never stops.
pub struct FrameContext {
    pub scheduler: Rc<RefCell<Scheduler>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn new(scheduler: Rc<RefCell<Scheduler>>) -> Self {
        Self {
            scheduler,
            started: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.scheduler.borrow_mut().tick(now_ms);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
