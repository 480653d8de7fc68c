// Host-side tests for entrance staggering and stat counters.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod intro {
    include!("../src/core/intro.rs");
}

use constants::*;
use intro::*;

#[test]
fn entrances_are_staggered() {
    assert_eq!(stagger_delay_ms(0), INTRO_START_MS);
    assert_eq!(stagger_delay_ms(3), INTRO_START_MS + 3.0 * INTRO_STAGGER_MS);
}

#[test]
fn entrance_rises_into_place() {
    assert_eq!(entrance_frame(0, 0.0), (0.0, INTRO_RISE_PX));
    let (o, y) = entrance_frame(0, INTRO_START_MS + INTRO_DURATION_MS / 2.0);
    assert!((o - 0.875).abs() < 1e-5);
    assert!((y - INTRO_RISE_PX * 0.125).abs() < 1e-4);
    assert_eq!(entrance_frame(0, 10_000.0), (1.0, 0.0));

    // A later element is still hidden when the first starts moving
    let (o1, _) = entrance_frame(1, INTRO_START_MS + 100.0);
    assert_eq!(o1, 0.0);
}

#[test]
fn entrance_end_covers_the_last_element() {
    assert_eq!(entrance_end_ms(0), 0.0);
    assert_eq!(entrance_end_ms(1), INTRO_START_MS + INTRO_DURATION_MS);
    let end = entrance_end_ms(4);
    assert_eq!(entrance_frame(3, end).0, 1.0);
    assert!(entrance_frame(3, end - INTRO_DURATION_MS / 2.0).0 < 1.0);
    assert!(tween::progress(end - 1.0, stagger_delay_ms(3), INTRO_DURATION_MS) < 1.0);
}

#[test]
fn stats_parse_like_parse_int() {
    assert_eq!(
        parse_stat("12+"),
        Some(StatText {
            target: 12,
            suffix: "+".into()
        })
    );
    assert_eq!(
        parse_stat("  5 years"),
        Some(StatText {
            target: 5,
            suffix: "   years".into()
        })
    );
    assert_eq!(parse_stat("-3").map(|s| s.target), Some(-3));
    assert_eq!(parse_stat("abc"), None);
    assert_eq!(parse_stat(""), None);
    assert_eq!(parse_stat("v2"), None);
}

#[test]
fn suffix_drops_every_digit() {
    let stat = parse_stat("100% in 24h").unwrap();
    assert_eq!(stat.target, 100);
    assert_eq!(stat.suffix, "% in h");
}

#[test]
fn counter_counts_up_and_rounds() {
    let stat = StatText {
        target: 50,
        suffix: "+".into(),
    };
    assert_eq!(counter_text(&stat, 0.0), "0+");
    assert_eq!(counter_text(&stat, COUNTER_DURATION_MS / 2.0), "25+");
    assert_eq!(counter_text(&stat, COUNTER_DURATION_MS * 0.6), "30+");
    assert_eq!(counter_text(&stat, COUNTER_DURATION_MS), "50+");
    assert_eq!(counter_text(&stat, COUNTER_DURATION_MS * 3.0), "50+");
}
