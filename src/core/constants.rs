// Effect tuning shared by the pure core and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SPREAD: f32 = 800.0; // x/z extent of the cloud
pub const PARTICLE_HEIGHT: f32 = 200.0; // y extent of the cloud
pub const PARTICLE_SIZE: f32 = 2.0;
pub const PARTICLE_NEO_SIZE: f32 = 3.0;
pub const PARTICLE_OPACITY: f32 = 0.9;
pub const PARTICLE_NEO_OPACITY: f32 = 1.0;
pub const PARTICLE_COLOR: u32 = 0x00ffff; // cyan
pub const PARTICLE_NEO_COLOR: u32 = 0x00ff00; // green

pub const SPIN_RATE: f32 = 0.15; // rad/s around Y
pub const PULSE_RATE: f32 = 0.5; // rad/s of the breathing sine
pub const PULSE_DEPTH: f32 = 0.05;
pub const PARALLAX_DAMPING: f32 = 0.05; // lerp factor per frame
pub const TILT_FULL_SCALE_DEG: f64 = 45.0; // orientation angle mapped to 1.0

pub const FOG_COLOR: u32 = 0x050505;
pub const FOG_DENSITY: f32 = 0.002;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 20.0, 100.0];
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Floating shapes
pub const SHAPE_COUNT: usize = 15;
pub const SHAPE_COLORS: [&str; 5] = ["#00FFFF", "#FF00FF", "#69f0ae", "#b86adf", "#ffffff"];
pub const SHAPE_SIZE_MIN: u32 = 20;
pub const SHAPE_SIZE_MAX: u32 = 80;
pub const SHAPE_OPACITY_MIN: f32 = 0.1;
pub const SHAPE_OPACITY_MAX: f32 = 0.4;
pub const SHAPE_TRAVEL_PX: i32 = 300;
pub const SHAPE_SCALE_MIN: f32 = 0.5;
pub const SHAPE_SCALE_MAX: f32 = 1.5;
pub const SHAPE_DURATION_MIN_MS: u32 = 15_000;
pub const SHAPE_DURATION_MAX_MS: u32 = 30_000;
pub const SHAPE_NEO_COLOR: &str = "#00ff00";
pub const SHAPE_NEO_GLOW: &str = "0 0 10px #00ff00";
pub const SHAPE_DEFAULT_BORDER: &str = "rgba(255,255,255,0.3)";
pub const SHAPE_PARALLAX_DIVISOR: f64 = 20.0;

// Placement: percentages of the viewport; the centre rectangle stays clear
pub const PLACEMENT_MAX_ATTEMPTS: u32 = 20;
pub const CLEAR_X_MIN: f32 = 20.0;
pub const CLEAR_X_MAX: f32 = 80.0;
pub const CLEAR_Y_MIN: f32 = 10.0;
pub const CLEAR_Y_MAX: f32 = 90.0;

// Ambient audio
pub const NOISE_SECONDS: f32 = 2.0;
pub const NOISE_LEAK: f32 = 0.02;
pub const NOISE_MAKEUP_GAIN: f32 = 3.5;
pub const LOWPASS_HZ: f32 = 400.0;
pub const FADE_TARGET_GAIN: f32 = 0.1;
pub const FADE_TIME_CONSTANT_SEC: f64 = 3.0;
pub const PRIMING_SAMPLE_RATE: f32 = 22_050.0;

// Theme toggle
pub const KEY_BUFFER_LEN: usize = 20;
pub const SECRET_CODES: [&str; 2] = ["sijo", "neo"];
pub const TAP_WINDOW_MS: f64 = 500.0;
pub const TAPS_TO_TOGGLE: u32 = 3;
pub const NEO_MARKER: &str = "neo";

// Cursor and interaction
pub const TRAIL_SMOOTHING: f32 = 0.15;
pub const MAGNET_PULL: f32 = 0.3;
pub const TILT_RANGE_DEG: f32 = 10.0;
pub const TILT_HOVER_SCALE: f32 = 1.02;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const STICKY_SCROLL_PX: f64 = 100.0;

// Page-transition curtain
pub const CURTAIN_FADE_MS: i32 = 600;
pub const CURTAIN_REVEAL_DELAY_MS: i32 = 100;

// Intro
pub const INTRO_START_MS: f64 = 300.0;
pub const INTRO_STAGGER_MS: f64 = 200.0;
pub const INTRO_DURATION_MS: f64 = 800.0;
pub const INTRO_RISE_PX: f32 = 30.0;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
