use super::constants::{
    MAGNET_PULL, STICKY_SCROLL_PX, TILT_HOVER_SCALE, TILT_PERSPECTIVE_PX, TILT_RANGE_DEG,
    TRAIL_SMOOTHING,
};
use glam::Vec2;

/// Cursor outline that trails the pointer with exponential smoothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trail {
    pub pos: Vec2,
}

impl Trail {
    /// One frame of easing; the remaining distance shrinks by
    /// `1 - TRAIL_SMOOTHING` each call.
    pub fn step(&mut self, pointer: Vec2) -> Vec2 {
        self.pos += (pointer - self.pos) * TRAIL_SMOOTHING;
        self.pos
    }
}

/// Offset for a magnetic element whose centre is at `center` while the
/// pointer is at `pointer`.
#[inline]
pub fn magnetic_offset(pointer: Vec2, center: Vec2) -> Vec2 {
    (pointer - center) * MAGNET_PULL
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` relative to
/// the top-left of a `width` x `height` card.
pub fn tilt_angles(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x_pct = x / width;
    let y_pct = y / height;
    ((0.5 - y_pct) * TILT_RANGE_DEG, (x_pct - 0.5) * TILT_RANGE_DEG)
}

pub fn tilt_css(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale({TILT_HOVER_SCALE})"
    )
}

pub fn tilt_neutral_css() -> String {
    format!("perspective({TILT_PERSPECTIVE_PX}px) rotateX(0) rotateY(0) scale(1)")
}

#[inline]
pub fn header_is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_SCROLL_PX
}
