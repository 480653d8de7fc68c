// Time-to-progress helpers used by every animated layer.

/// Linear progress of a tween that starts after `delay_ms` and lasts
/// `duration_ms`, clamped to `[0, 1]`.
#[inline]
pub fn progress(elapsed_ms: f64, delay_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return if elapsed_ms >= delay_ms { 1.0 } else { 0.0 };
    }
    (((elapsed_ms - delay_ms) / duration_ms).clamp(0.0, 1.0)) as f32
}

/// Looping progress that runs 0 → 1 and back to 0 (alternate direction),
/// one leg per `duration_ms`.
#[inline]
pub fn ping_pong(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    let legs = elapsed_ms.max(0.0) / duration_ms;
    let leg = legs.floor();
    let frac = (legs - leg) as f32;
    if (leg as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
