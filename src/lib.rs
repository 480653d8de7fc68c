#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod constants;
mod core;
mod cursor;
mod curtain;
mod dom;
mod events;
mod frame;
mod intro;
mod particles;
mod render;
mod reveal;
mod shapes;
mod stage;
mod theme;

use stage::Stage;

/// Entry point. The module must be loaded after the document body is parsed
/// (an ES module script or a deferred script).
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-fx starting");

    let stage = match Stage::new() {
        Ok(s) => s,
        Err(e) => {
            log::error!("init error: {:?}", e);
            return Ok(());
        }
    };

    // Curtain first so it covers everything else while the page settles
    curtain::install(&stage);
    theme::install(&stage);
    audio::install(&stage);
    shapes::install(&stage);
    cursor::install(&stage);
    reveal::install(&stage);
    intro::install(&stage);

    events::wire_pointermove(&stage);
    events::wire_deviceorientation(&stage);
    events::wire_permission_request(&stage);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        stage.scheduler.clone(),
    )));
    frame::start_loop(frame_ctx);

    spawn_local(particles::install(stage));
    Ok(())
}
