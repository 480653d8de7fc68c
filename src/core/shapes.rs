// Randomized floating decorations and their looping motion.

use super::constants::*;
use super::placement::{place_in_viewport, Placement};
use super::theme::Theme;
use super::tween::{lerp, ping_pong};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];
}

/// Static appearance of one shape, decided once at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    pub kind: ShapeKind,
    pub size_px: u32,
    pub color: &'static str,
    pub opacity: f32,
    pub placement: Placement,
}

impl ShapeStyle {
    /// Inline style declarations for the element, in application order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let size = self.size_px;
        let mut out = vec![
            ("position", "absolute".to_string()),
            ("left", format!("{}vw", self.placement.x)),
            ("top", format!("{}vh", self.placement.y)),
            ("opacity", format!("{:.2}", self.opacity)),
            (
                "transition",
                "border-color 0.5s, box-shadow 0.5s".to_string(),
            ),
        ];
        match self.kind {
            ShapeKind::Triangle => {
                out.push(("width", "0".to_string()));
                out.push(("height", "0".to_string()));
                out.push(("border", "none".to_string()));
                out.push(("border-left", format!("{}px solid transparent", size / 2)));
                out.push(("border-right", format!("{}px solid transparent", size / 2)));
                out.push(("border-bottom", format!("{}px solid {}", size, self.color)));
                out.push(("background-color", "transparent".to_string()));
            }
            ShapeKind::Circle | ShapeKind::Square => {
                out.push(("width", format!("{size}px")));
                out.push(("height", format!("{size}px")));
                out.push(("background-color", "rgba(255,255,255,0.05)".to_string()));
                out.push(("border", format!("1px solid {}", self.color)));
                let radius = if self.kind == ShapeKind::Circle { "50%" } else { "0%" };
                out.push(("border-radius", radius.to_string()));
            }
        }
        out
    }

    /// Declarations that recolour the shape for `theme`. Never touches
    /// `transform`, so motion continues undisturbed.
    pub fn theme_declarations(&self, theme: Theme) -> Vec<(&'static str, &'static str)> {
        let (color, shadow) = match theme {
            Theme::Neo => (SHAPE_NEO_COLOR, SHAPE_NEO_GLOW),
            Theme::Default => (SHAPE_DEFAULT_BORDER, "none"),
        };
        match self.kind {
            ShapeKind::Triangle => vec![("border-bottom-color", color), ("box-shadow", shadow)],
            _ => vec![("border-color", color), ("box-shadow", shadow)],
        }
    }
}

/// CSS transform components animated on a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
}

impl ShapeTransform {
    pub const IDENTITY: ShapeTransform = ShapeTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn lerp(&self, to: &ShapeTransform, t: f32) -> ShapeTransform {
        ShapeTransform {
            translate_x: lerp(self.translate_x, to.translate_x, t),
            translate_y: lerp(self.translate_y, to.translate_y, t),
            rotate: lerp(self.rotate, to.rotate, t),
            rotate_x: lerp(self.rotate_x, to.rotate_x, t),
            rotate_y: lerp(self.rotate_y, to.rotate_y, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translateX({:.2}px) translateY({:.2}px) rotate({:.2}deg) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3})",
            self.translate_x, self.translate_y, self.rotate, self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Linear, alternating, endless motion from identity to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMotion {
    pub target: ShapeTransform,
    pub duration_ms: f64,
}

impl ShapeMotion {
    pub fn sample(&self, elapsed_ms: f64) -> ShapeTransform {
        let t = ping_pong(elapsed_ms, self.duration_ms);
        ShapeTransform::IDENTITY.lerp(&self.target, t)
    }
}

pub fn random_style<R: Rng>(rng: &mut R) -> ShapeStyle {
    let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    ShapeStyle {
        kind,
        size_px: rng.gen_range(SHAPE_SIZE_MIN..=SHAPE_SIZE_MAX),
        color: SHAPE_COLORS[rng.gen_range(0..SHAPE_COLORS.len())],
        opacity: rng.gen_range(SHAPE_OPACITY_MIN..=SHAPE_OPACITY_MAX),
        placement: place_in_viewport(rng),
    }
}

pub fn random_motion<R: Rng>(rng: &mut R) -> ShapeMotion {
    let travel = -SHAPE_TRAVEL_PX..=SHAPE_TRAVEL_PX;
    ShapeMotion {
        target: ShapeTransform {
            translate_x: rng.gen_range(travel.clone()) as f32,
            translate_y: rng.gen_range(travel) as f32,
            rotate: rng.gen_range(0..=360) as f32,
            rotate_x: rng.gen_range(0..=360) as f32,
            rotate_y: rng.gen_range(0..=360) as f32,
            scale: rng.gen_range(SHAPE_SCALE_MIN..=SHAPE_SCALE_MAX),
        },
        duration_ms: rng.gen_range(SHAPE_DURATION_MIN_MS..=SHAPE_DURATION_MAX_MS) as f64,
    }
}

/// Container parallax from device tilt: `(x, y)` where x comes from gamma and
/// y from beta. `None` when the sensor reports no gamma.
pub fn container_parallax(gamma: Option<f64>, beta: Option<f64>) -> Option<(f64, f64)> {
    let gamma = gamma?;
    let beta = beta.unwrap_or(0.0);
    Some((gamma / SHAPE_PARALLAX_DIVISOR, beta / SHAPE_PARALLAX_DIVISOR))
}

pub fn container_parallax_css(x: f64, y: f64) -> String {
    format!("translate({x:.2}px, {y:.2}px) rotateX({y:.2}deg) rotateY({x:.2}deg)")
}
