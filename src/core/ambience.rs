// Ambient noise synthesis and the gesture unlock latch.

use super::constants::{NOISE_LEAK, NOISE_MAKEUP_GAIN};
use rand::Rng;

/// Brown-ish noise: a leaky integrator over uniform white noise with
/// make-up gain applied after the recursion.
pub fn brown_noise<R: Rng>(rng: &mut R, len: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(len);
    let mut last = 0.0_f32;
    for _ in 0..len {
        let white = rng.gen::<f32>() * 2.0 - 1.0;
        last = (last + NOISE_LEAK * white) / (1.0 + NOISE_LEAK);
        out.push(last * NOISE_MAKEUP_GAIN);
    }
    out
}

/// One-shot latch for the audio unlock gesture.
#[derive(Debug, Default)]
pub struct UnlockLatch {
    fired: bool,
}

impl UnlockLatch {
    /// True exactly once.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
