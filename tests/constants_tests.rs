// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Lerp and smoothing factors are fractions of the remaining distance
    assert!(PARALLAX_DAMPING > 0.0 && PARALLAX_DAMPING < 1.0);
    assert!(TRAIL_SMOOTHING > 0.0 && TRAIL_SMOOTHING < 1.0);
    assert!(MAGNET_PULL > 0.0 && MAGNET_PULL < 1.0);

    // Opacities are alpha values
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(PARTICLE_NEO_OPACITY > 0.0 && PARTICLE_NEO_OPACITY <= 1.0);
    assert!(SHAPE_OPACITY_MIN > 0.0 && SHAPE_OPACITY_MAX <= 1.0);

    // Intersection thresholds are ratios
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);

    // Fade-in should stay quiet
    assert!(FADE_TARGET_GAIN > 0.0 && FADE_TARGET_GAIN <= 0.25);
    assert!(FADE_TIME_CONSTANT_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(SHAPE_SIZE_MIN < SHAPE_SIZE_MAX);
    assert!(SHAPE_OPACITY_MIN < SHAPE_OPACITY_MAX);
    assert!(SHAPE_SCALE_MIN < SHAPE_SCALE_MAX);
    assert!(SHAPE_DURATION_MIN_MS < SHAPE_DURATION_MAX_MS);
    assert!(CAMERA_NEAR < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clear_zone_leaves_room_to_place_shapes() {
    // The zone must not cover the whole 0..=100 square or sampling can never succeed
    assert!(CLEAR_X_MIN > 0.0 && CLEAR_X_MAX < 100.0);
    assert!(CLEAR_Y_MIN > 0.0 && CLEAR_Y_MAX < 100.0);
    assert!(CLEAR_X_MIN < CLEAR_X_MAX && CLEAR_Y_MIN < CLEAR_Y_MAX);
    assert!(PLACEMENT_MAX_ATTEMPTS >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn neo_theme_changes_the_particle_look() {
    assert_ne!(PARTICLE_COLOR, PARTICLE_NEO_COLOR);
    assert!(PARTICLE_NEO_SIZE > PARTICLE_SIZE);
    assert!(PARTICLE_NEO_OPACITY >= PARTICLE_OPACITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_cloud() {
    // Far plane reaches the back of the cloud; eye sits inside its height band
    assert!(CAMERA_EYE[2] > 0.0);
    assert!(CAMERA_EYE[2] + PARTICLE_SPREAD / 2.0 < CAMERA_FAR);
    assert!(CAMERA_EYE[1].abs() < PARTICLE_HEIGHT / 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn secret_codes_fit_in_key_buffer() {
    for code in SECRET_CODES {
        assert!(!code.is_empty());
        assert!(code.len() <= KEY_BUFFER_LEN, "code {code:?} longer than buffer");
    }
    assert!(TAPS_TO_TOGGLE >= 2);
    assert!(TAP_WINDOW_MS > 0.0);
}

#[test]
fn core_modules_can_be_included_by_tests() {
    // Host tests pull these files in with include!, where inner doc
    // comments and inner attributes are rejected
    let sources = [
        ("ambience", include_str!("../src/core/ambience.rs")),
        ("camera", include_str!("../src/core/camera.rs")),
        ("constants", include_str!("../src/core/constants.rs")),
        ("curtain", include_str!("../src/core/curtain.rs")),
        ("interaction", include_str!("../src/core/interaction.rs")),
        ("intro", include_str!("../src/core/intro.rs")),
        ("particles", include_str!("../src/core/particles.rs")),
        ("placement", include_str!("../src/core/placement.rs")),
        ("scheduler", include_str!("../src/core/scheduler.rs")),
        ("shapes", include_str!("../src/core/shapes.rs")),
        ("theme", include_str!("../src/core/theme.rs")),
        ("tween", include_str!("../src/core/tween.rs")),
    ];
    for (name, src) in sources {
        for line in src.lines() {
            let line = line.trim_start();
            assert!(!line.starts_with("//!"), "{name}: inner doc comment");
            assert!(!line.starts_with("#!["), "{name}: inner attribute");
        }
    }
}
