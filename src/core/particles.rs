// Particle cloud layout, material and per-frame motion.

use super::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

/// Scatter `count` particles uniformly in the cloud volume centred on the
/// origin.
pub fn scatter_positions<R: Rng>(rng: &mut R, count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                (rng.gen::<f32>() - 0.5) * PARTICLE_HEIGHT,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
            ]
        })
        .collect()
}

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Appearance of the point cloud. Shared between the renderer and the theme
/// switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleMaterial {
    pub color: u32,
    pub size: f32,
    pub opacity: f32,
}

impl Default for ParticleMaterial {
    fn default() -> Self {
        Self {
            color: PARTICLE_COLOR,
            size: PARTICLE_SIZE,
            opacity: PARTICLE_OPACITY,
        }
    }
}

impl ParticleMaterial {
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = hex_to_rgb(self.color);
        [r, g, b, self.opacity]
    }
}

/// Rotation and breathing scale of the cloud, eased toward a parallax target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldMotion {
    /// x: pitch, y: yaw (radians)
    pub rotation: Vec2,
    pub scale: f32,
}

impl FieldMotion {
    /// Advance to `elapsed_sec` with parallax `target` in [-1, 1]².
    ///
    /// Yaw is first reset to the spin angle and then eased toward the target,
    /// so the spin and the parallax blend rather than accumulate.
    pub fn step(&mut self, elapsed_sec: f32, target: Vec2) {
        self.rotation.y = elapsed_sec * SPIN_RATE;
        self.scale = 1.0 + (elapsed_sec * PULSE_RATE).sin() * PULSE_DEPTH;
        self.rotation.x += PARALLAX_DAMPING * (target.y - self.rotation.x);
        self.rotation.y += PARALLAX_DAMPING * (target.x - self.rotation.y);
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, Vec3::ZERO)
    }
}

/// Normalized parallax target for a pointer at `(client_x, client_y)` in a
/// viewport of `width` x `height`. Y grows upward.
pub fn pointer_target(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

/// Parallax target from device orientation. Returns `None` when the sensor
/// reports no gamma (desktops without sensors).
pub fn tilt_target(gamma: Option<f64>, beta: Option<f64>) -> Option<Vec2> {
    let gamma = gamma?;
    let beta = beta.unwrap_or(0.0);
    let x = (gamma / TILT_FULL_SCALE_DEG).clamp(-1.0, 1.0);
    let y = (beta / TILT_FULL_SCALE_DEG).clamp(-1.0, 1.0);
    Some(Vec2::new(x as f32, y as f32))
}

/// Pointer state shared by the particle and cursor layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Last pointer position in CSS pixels.
    pub client: Vec2,
    /// Parallax target in [-1, 1]².
    pub target: Vec2,
}
