// Staggered entrance and stat counters played once after load.

use super::constants::{
    COUNTER_DURATION_MS, INTRO_DURATION_MS, INTRO_RISE_PX, INTRO_STAGGER_MS, INTRO_START_MS,
};
use super::tween::{ease_out_cubic, lerp, progress};

#[inline]
pub fn stagger_delay_ms(index: usize) -> f64 {
    INTRO_START_MS + INTRO_STAGGER_MS * index as f64
}

/// `(opacity, translate_y_px)` of entrance element `index` at `elapsed_ms`.
pub fn entrance_frame(index: usize, elapsed_ms: f64) -> (f32, f32) {
    let t = ease_out_cubic(progress(
        elapsed_ms,
        stagger_delay_ms(index),
        INTRO_DURATION_MS,
    ));
    (t, lerp(INTRO_RISE_PX, 0.0, t))
}

/// Time after which all `count` entrances have settled.
pub fn entrance_end_ms(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    stagger_delay_ms(count - 1) + INTRO_DURATION_MS
}

/// A stat like `"12+"`: the leading integer and everything that is not a
/// digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatText {
    pub target: i64,
    pub suffix: String,
}

/// Parse the leading integer the way `parseInt` does (leading whitespace and
/// an optional sign allowed). `None` when there is no leading integer.
pub fn parse_stat(text: &str) -> Option<StatText> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let target = digits.parse::<i64>().ok()? * sign;
    let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
    Some(StatText { target, suffix })
}

/// Counter text at `elapsed_ms`: linear from 0 to the target, rounded.
pub fn counter_text(stat: &StatText, elapsed_ms: f64) -> String {
    let t = progress(elapsed_ms, 0.0, COUNTER_DURATION_MS) as f64;
    let value = (stat.target as f64 * t).round() as i64;
    format!("{}{}", value, stat.suffix)
}
