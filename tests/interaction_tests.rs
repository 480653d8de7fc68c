// Host-side tests for cursor, tilt and scroll interactions.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}

use constants::*;
use glam::Vec2;
use interaction::*;

#[test]
fn trail_converges_geometrically() {
    let mut trail = Trail::default();
    let pointer = Vec2::new(400.0, 300.0);
    let mut prev = pointer.distance(trail.pos);
    for _ in 0..60 {
        trail.step(pointer);
        let d = pointer.distance(trail.pos);
        assert!((d - prev * (1.0 - TRAIL_SMOOTHING)).abs() < 1e-3);
        prev = d;
    }
    assert!(prev < 1.0);
}

#[test]
fn trail_at_rest_stays_put() {
    let mut trail = Trail {
        pos: Vec2::new(10.0, 20.0),
    };
    assert_eq!(trail.step(Vec2::new(10.0, 20.0)), Vec2::new(10.0, 20.0));
}

#[test]
fn magnet_pulls_a_fraction_toward_pointer() {
    let off = magnetic_offset(Vec2::new(110.0, 90.0), Vec2::new(100.0, 100.0));
    assert!((off - Vec2::new(3.0, -3.0)).length() < 1e-5);
    assert_eq!(magnetic_offset(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
}

#[test]
fn tilt_is_neutral_at_centre_and_signed_at_corners() {
    assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    let (rx, ry) = tilt_angles(0.0, 0.0, 200.0, 100.0);
    assert_eq!((rx, ry), (TILT_RANGE_DEG / 2.0, -TILT_RANGE_DEG / 2.0));
    let (rx, ry) = tilt_angles(200.0, 100.0, 200.0, 100.0);
    assert_eq!((rx, ry), (-TILT_RANGE_DEG / 2.0, TILT_RANGE_DEG / 2.0));
    assert_eq!(tilt_angles(5.0, 5.0, 0.0, 100.0), (0.0, 0.0));
}

#[test]
fn tilt_css_formats() {
    assert_eq!(
        tilt_css(2.5, -1.0),
        "perspective(1000px) rotateX(2.50deg) rotateY(-1.00deg) scale(1.02)"
    );
    assert_eq!(
        tilt_neutral_css(),
        "perspective(1000px) rotateX(0) rotateY(0) scale(1)"
    );
}

#[test]
fn header_sticks_past_threshold() {
    assert!(!header_is_sticky(0.0));
    assert!(!header_is_sticky(STICKY_SCROLL_PX));
    assert!(header_is_sticky(STICKY_SCROLL_PX + 1.0));
}
