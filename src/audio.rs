use crate::constants::UNLOCK_EVENTS;
use crate::core::ambience::{brown_noise, UnlockLatch};
use crate::core::{
    FADE_TARGET_GAIN, FADE_TIME_CONSTANT_SEC, LOWPASS_HZ, NOISE_SECONDS, PRIMING_SAMPLE_RATE,
};
use crate::stage::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Looping filtered noise behind a gain that starts silent.
#[derive(Clone)]
pub struct Ambience {
    ctx: web::AudioContext,
    gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn noise_buffer(audio_ctx: &web::AudioContext) -> Result<web::AudioBuffer, ()> {
    let sr = audio_ctx.sample_rate();
    let len = (sr * NOISE_SECONDS) as u32;
    let buffer = audio_ctx
        .create_buffer(1, len, sr)
        .map_err(|e| {
            log::error!("noise AudioBuffer error: {:?}", e);
        })?;
    let mut samples = brown_noise(&mut rand::thread_rng(), len as usize);
    buffer
        .copy_to_channel(&mut samples, 0)
        .map_err(|e| {
            log::error!("noise copy_to_channel error: {:?}", e);
        })?;
    Ok(buffer)
}

pub fn build_ambience(audio_ctx: &web::AudioContext) -> Result<Ambience, ()> {
    let source = audio_ctx.create_buffer_source().map_err(|e| {
        log::error!("AudioBufferSourceNode error: {:?}", e);
    })?;
    source.set_buffer(Some(&noise_buffer(audio_ctx)?));
    source.set_loop(true);

    let filter = web::BiquadFilterNode::new(audio_ctx).map_err(|e| {
        log::error!("BiquadFilterNode error: {:?}", e);
    })?;
    filter.set_type(web::BiquadFilterType::Lowpass);
    filter.frequency().set_value(LOWPASS_HZ);

    let gain = create_gain(audio_ctx, 0.0, "Ambience")?;

    _ = source.connect_with_audio_node(&filter);
    _ = filter.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());
    if let Err(e) = source.start() {
        log::error!("noise start error: {:?}", e);
        return Err(());
    }

    Ok(Ambience {
        ctx: audio_ctx.clone(),
        gain,
    })
}

impl Ambience {
    fn resume_if_suspended(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    pub fn fade_in(&self) {
        self.resume_if_suspended();
        let now = self.ctx.current_time();
        _ = self
            .gain
            .gain()
            .set_target_at_time(FADE_TARGET_GAIN, now, FADE_TIME_CONSTANT_SEC);
    }

    /// Some mobile engines only start output after a buffer is played from a
    /// gesture. Best effort.
    fn prime(&self) {
        let Ok(buffer) = self.ctx.create_buffer(1, 1, PRIMING_SAMPLE_RATE) else {
            return;
        };
        let Ok(src) = self.ctx.create_buffer_source() else {
            return;
        };
        src.set_buffer(Some(&buffer));
        _ = src.connect_with_audio_node(&self.ctx.destination());
        _ = src.start_with_when(0.0);
    }

    pub fn unlock(&self) {
        self.resume_if_suspended();
        self.prime();
        self.fade_in();
    }
}

/// Build the ambience and arm a one-shot unlock on the first gesture.
pub fn install(stage: &Stage) {
    let audio_ctx = match web::AudioContext::new() {
        Ok(c) => c,
        Err(e) => {
            log::error!("AudioContext error: {:?}", e);
            return;
        }
    };
    let Ok(ambience) = build_ambience(&audio_ctx) else {
        return;
    };
    wire_unlock(&stage.document, ambience);
    log::info!("[audio] ambience armed");
}

fn wire_unlock(document: &web::Document, ambience: Ambience) {
    let latch = Rc::new(RefCell::new(UnlockLatch::default()));
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle_inner = handle.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !latch.borrow_mut().fire() {
            return;
        }
        ambience.unlock();
        log::info!("[audio] unlocked");
        if let Some(cb) = handle_inner.borrow().as_ref() {
            for ev in UNLOCK_EVENTS {
                _ = doc.remove_event_listener_with_callback(ev, cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>);
    for ev in UNLOCK_EVENTS {
        _ = document.add_event_listener_with_callback(ev, closure.as_ref().unchecked_ref());
    }
    *handle.borrow_mut() = Some(closure);
}
