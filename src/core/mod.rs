pub mod ambience;
pub mod camera;
pub mod constants;
pub mod curtain;
pub mod interaction;
pub mod intro;
pub mod particles;
pub mod placement;
pub mod scheduler;
pub mod shapes;
pub mod theme;
pub mod tween;

pub use camera::Camera;
pub use constants::*;
pub use particles::{FieldMotion, ParticleMaterial, PointerState};
pub use scheduler::{FrameClock, FrameLayer, LayerStatus, Scheduler};
pub use theme::{ChangeSource, Theme, ThemeChange, ThemeSwitch};

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
