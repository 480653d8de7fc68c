// Host-side tests for the hidden theme switch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod theme {
    include!("../src/core/theme.rs");
}

use constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use theme::*;

fn type_keys(switch: &mut ThemeSwitch, text: &str) -> Vec<ThemeChange> {
    text.chars()
        .filter_map(|c| switch.on_key(&c.to_string()))
        .collect()
}

#[test]
fn secret_code_toggles_and_clears_buffer() {
    let mut switch = ThemeSwitch::new();
    let changes = type_keys(&mut switch, "sijo");
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].theme, Theme::Neo);
    assert_eq!(changes[0].source, ChangeSource::Keys);
    assert!(switch.keys().is_empty(), "match must clear the buffer");
}

#[test]
fn alternate_code_also_toggles() {
    let mut switch = ThemeSwitch::new();
    let changes = type_keys(&mut switch, "xxneo");
    assert_eq!(changes.len(), 1);
    assert_eq!(switch.theme(), Theme::Neo);
}

#[test]
fn two_triggers_restore_original_theme() {
    let mut switch = ThemeSwitch::new();
    type_keys(&mut switch, "neo");
    assert_eq!(switch.theme(), Theme::Neo);
    type_keys(&mut switch, "sijo");
    assert_eq!(switch.theme(), Theme::Default);
}

#[test]
fn key_buffer_never_exceeds_cap() {
    let mut buf = KeyBuffer::default();
    for i in 0..200 {
        // digits never form a secret code
        buf.push(&(i % 10).to_string());
        assert!(buf.len() <= KEY_BUFFER_LEN);
    }
    assert_eq!(buf.len(), KEY_BUFFER_LEN);
}

#[test]
fn key_buffer_matches_across_named_keys() {
    // Non-character keys are recorded by name and can sit between letters
    let mut buf = KeyBuffer::default();
    assert!(!buf.push("Shift"));
    assert!(!buf.push("n"));
    assert!(!buf.push("e"));
    assert!(buf.push("o"));
    assert!(buf.is_empty());
}

#[test]
fn code_split_by_other_key_does_not_match() {
    let mut switch = ThemeSwitch::new();
    let changes = type_keys(&mut switch, "nexo");
    assert!(changes.is_empty());
    assert_eq!(switch.theme(), Theme::Default);
}

#[test]
fn code_scrolled_out_of_window_is_forgotten() {
    let mut buf = KeyBuffer::default();
    buf.push("n");
    buf.push("e");
    for _ in 0..KEY_BUFFER_LEN {
        buf.push("x");
    }
    assert!(!buf.push("o"));
}

#[test]
fn triple_tap_within_window_toggles() {
    let mut switch = ThemeSwitch::new();
    assert!(switch.on_tap(1_000.0).is_none());
    assert!(switch.on_tap(1_200.0).is_none());
    let change = switch.on_tap(1_400.0).expect("third tap toggles");
    assert_eq!(change.theme, Theme::Neo);
    assert_eq!(change.source, ChangeSource::Taps);
    assert_eq!(switch.taps().count(), 0);
}

#[test]
fn slow_tap_resets_count_to_one() {
    let mut taps = TapDetector::default();
    taps.tap(1_000.0);
    taps.tap(1_200.0);
    assert_eq!(taps.count(), 2);
    assert!(!taps.tap(1_200.0 + TAP_WINDOW_MS + 1.0));
    assert_eq!(taps.count(), 1, "a late tap starts a new sequence");
}

#[test]
fn gap_exactly_at_window_is_too_slow() {
    let mut taps = TapDetector::default();
    taps.tap(1_000.0);
    taps.tap(1_000.0 + TAP_WINDOW_MS);
    assert_eq!(taps.count(), 1);
}

#[test]
fn zero_gap_does_not_count() {
    let mut taps = TapDetector::default();
    taps.tap(1_000.0);
    taps.tap(1_000.0);
    assert_eq!(taps.count(), 1);
}

#[test]
fn after_toggle_three_more_quick_taps_are_needed() {
    let mut taps = TapDetector::default();
    let fired: Vec<bool> = [1_000.0, 1_100.0, 1_200.0, 1_300.0, 1_400.0, 1_500.0]
        .into_iter()
        .map(|t| taps.tap(t))
        .collect();
    assert_eq!(fired, vec![false, false, true, false, false, true]);
}

#[test]
fn subscribers_see_every_transition() {
    let seen: Rc<RefCell<Vec<ThemeChange>>> = Rc::new(RefCell::new(Vec::new()));
    let mut switch = ThemeSwitch::new();
    let sink = seen.clone();
    switch.subscribe(move |c: &ThemeChange| sink.borrow_mut().push(*c));

    switch.apply(Theme::Neo, ChangeSource::Location);
    type_keys(&mut switch, "neo");
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].source, ChangeSource::Location);
    assert_eq!(seen[1].theme, Theme::Default);
}

#[test]
fn location_selects_neo_from_hash_or_path() {
    assert_eq!(theme_from_location("#neo", "/"), Theme::Neo);
    assert_eq!(theme_from_location("", "/portfolio/neo"), Theme::Neo);
    assert_eq!(theme_from_location("", "/neo/about.html"), Theme::Neo);
    assert_eq!(theme_from_location("#neon", "/"), Theme::Default);
    assert_eq!(theme_from_location("", "/index.html"), Theme::Default);
}

#[test]
fn location_update_sets_or_drops_marker() {
    assert_eq!(
        location_update(Theme::Neo, "/a", "?q=1"),
        LocationUpdate::SetHash("neo")
    );
    assert_eq!(
        location_update(Theme::Default, "/a", "?q=1"),
        LocationUpdate::PushUrl("/a?q=1".to_string())
    );
}

#[test]
fn particle_colors_follow_theme() {
    assert_eq!(Theme::Default.particle_color(), 0x00ffff);
    assert_eq!(Theme::Neo.particle_color(), 0x00ff00);
}
