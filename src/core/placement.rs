// Bounded rejection sampling that keeps decorations out of a central
// rectangle.

use super::constants::{CLEAR_X_MAX, CLEAR_X_MIN, CLEAR_Y_MAX, CLEAR_Y_MIN, PLACEMENT_MAX_ATTEMPTS};

/// Axis-aligned rectangle (in viewport percent) that placements avoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearZone {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for ClearZone {
    fn default() -> Self {
        Self {
            x_min: CLEAR_X_MIN,
            x_max: CLEAR_X_MAX,
            y_min: CLEAR_Y_MIN,
            y_max: CLEAR_Y_MAX,
        }
    }
}

impl ClearZone {
    /// A point is acceptable when it lies outside the zone on either axis.
    #[inline]
    pub fn accepts(&self, x: f32, y: f32) -> bool {
        x < self.x_min || x > self.x_max || y < self.y_min || y > self.y_max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub attempts: u32,
    /// False when every attempt landed inside the zone and the last sample
    /// was kept anyway.
    pub accepted: bool,
}

/// Draw samples until one falls outside `zone`, giving up after
/// `max_attempts` draws. On give-up the last sample is returned.
///
/// `max_attempts` of 0 is treated as 1: at least one sample is always drawn.
pub fn place_outside<F>(zone: &ClearZone, max_attempts: u32, mut sample: F) -> Placement
where
    F: FnMut() -> (f32, f32),
{
    let limit = max_attempts.max(1);
    let mut attempts = 0;
    let (mut x, mut y) = (0.0, 0.0);
    while attempts < limit {
        (x, y) = sample();
        attempts += 1;
        if zone.accepts(x, y) {
            return Placement {
                x,
                y,
                attempts,
                accepted: true,
            };
        }
    }
    Placement {
        x,
        y,
        attempts,
        accepted: false,
    }
}

/// Place using the default zone and attempt budget with integer percentages
/// in `0..=100`.
pub fn place_in_viewport<R: rand::Rng>(rng: &mut R) -> Placement {
    place_outside(&ClearZone::default(), PLACEMENT_MAX_ATTEMPTS, || {
        (
            rng.gen_range(0..=100) as f32,
            rng.gen_range(0..=100) as f32,
        )
    })
}
