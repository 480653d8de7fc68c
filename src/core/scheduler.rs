// Per-frame update fan-out.
//
// One animation-frame callback advances a `FrameClock` and hands it to
// every registered `FrameLayer`. Layers are independent: none reads
// another's state, so each can be tested with a synthetic clock.

/// Time since the first tick and since the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: f64,
    pub elapsed_ms: f64,
    pub dt_ms: f64,
    pub frame: u64,
}

impl FrameClock {
    /// Advance to the timestamp `now_ms`. The first call defines time zero.
    pub fn advance(&mut self, now_ms: f64) {
        let start = *self.start_ms.get_or_insert(now_ms);
        if self.frame > 0 {
            self.dt_ms = (now_ms - self.last_ms).max(0.0);
        }
        self.last_ms = now_ms;
        self.elapsed_ms = (now_ms - start).max(0.0);
        self.frame += 1;
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f32 {
        (self.elapsed_ms / 1000.0) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerStatus {
    Running,
    Finished,
}

pub trait FrameLayer {
    fn name(&self) -> &'static str;
    fn update(&mut self, clock: &FrameClock) -> LayerStatus;
}

#[derive(Default)]
pub struct Scheduler {
    clock: FrameClock,
    layers: Vec<Box<dyn FrameLayer>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, layer: Box<dyn FrameLayer>) {
        log::info!("[frame] layer added: {}", layer.name());
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Advance the clock and update every layer once, dropping layers that
    /// report [`LayerStatus::Finished`].
    pub fn tick(&mut self, now_ms: f64) {
        self.clock.advance(now_ms);
        let clock = self.clock;
        self.layers.retain_mut(|layer| match layer.update(&clock) {
            LayerStatus::Running => true,
            LayerStatus::Finished => {
                log::info!("[frame] layer finished: {}", layer.name());
                false
            }
        });
    }
}
