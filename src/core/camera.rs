// Perspective camera for the particle field.

use super::constants::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use glam::{Mat4, Vec3};

/// Right-handed camera looking down -Z from `eye`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Recompute the aspect ratio from a viewport size. Degenerate sizes are
    /// ignored.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.eye + Vec3::NEG_Z, Vec3::Y)
    }
}
