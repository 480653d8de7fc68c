use crate::core::{ParticleMaterial, PointerState, Scheduler, ThemeSwitch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles shared by every effect, handed to each component at install
/// time. Components keep clones of the `Rc`s they need and nothing else.
#[derive(Clone)]
pub struct Stage {
    pub window: web::Window,
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub theme: Rc<RefCell<ThemeSwitch>>,
    pub material: Rc<RefCell<ParticleMaterial>>,
    pub scheduler: Rc<RefCell<Scheduler>>,
}

impl Stage {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        Ok(Self {
            window,
            document,
            body,
            pointer: Rc::new(RefCell::new(PointerState::default())),
            theme: Rc::new(RefCell::new(ThemeSwitch::new())),
            material: Rc::new(RefCell::new(ParticleMaterial::default())),
            scheduler: Rc::new(RefCell::new(Scheduler::new())),
        })
    }

    #[inline]
    pub fn window_target(&self) -> &web::EventTarget {
        self.window.unchecked_ref()
    }

    #[inline]
    pub fn document_target(&self) -> &web::EventTarget {
        self.document.unchecked_ref()
    }
}
