// Host-side tests for the page-transition curtain.

#![allow(dead_code)]
mod curtain {
    include!("../src/core/curtain.rs");
}

use curtain::*;

const HOST: &str = "example.com";
const PAGE: &str = "https://example.com/";

fn link<'a>(hostname: &'a str, hash: &'a str, target: &'a str, href: &'a str) -> LinkInfo<'a> {
    LinkInfo {
        hostname,
        hash,
        target,
        href,
    }
}

#[test]
fn same_site_page_links_are_intercepted() {
    let l = link(HOST, "", "", "https://example.com/about");
    assert!(intercepts(&l, HOST, PAGE));
}

#[test]
fn other_links_navigate_normally() {
    let external = link("other.org", "", "", "https://other.org/");
    let fragment = link(HOST, "#contact", "", "https://example.com/#contact");
    let new_tab = link(HOST, "", "_blank", "https://example.com/about");
    let same_page = link(HOST, "", "", PAGE);
    for l in [external, fragment, new_tab, same_page] {
        assert!(!intercepts(&l, HOST, PAGE), "{:?}", l);
    }
}

#[test]
fn curtain_starts_covering() {
    let c = Curtain::default();
    assert_eq!(c.phase(), &CurtainPhase::Covering);
    assert_eq!(
        c.style(),
        CurtainStyle {
            opacity: 1.0,
            displayed: true
        }
    );
    assert_eq!(c.pending_navigation(), None);
}

#[test]
fn reveal_then_transition_end_hides() {
    let mut c = Curtain::default();
    // A stray transitionend before the fade starts changes nothing
    assert!(c.transition_ended().displayed);

    let s = c.reveal();
    assert_eq!(s.opacity, 0.0);
    assert!(s.displayed);
    assert_eq!(c.phase(), &CurtainPhase::Revealing);

    let s = c.transition_ended();
    assert!(!s.displayed);
    assert_eq!(c.phase(), &CurtainPhase::Hidden);
}

#[test]
fn close_covers_and_records_destination() {
    let mut c = Curtain::default();
    c.reveal();
    c.transition_ended();

    let s = c.close("https://example.com/work");
    assert_eq!(
        s,
        CurtainStyle {
            opacity: 1.0,
            displayed: true
        }
    );
    assert_eq!(c.pending_navigation(), Some("https://example.com/work"));

    // Fade-in finishing must not hide it, and a late reveal is ignored
    assert!(c.transition_ended().displayed);
    assert_eq!(c.reveal().opacity, 1.0);
}

#[test]
fn close_during_reveal_wins() {
    let mut c = Curtain::default();
    c.reveal();
    c.close("https://example.com/next");
    let s = c.transition_ended();
    assert!(s.displayed);
    assert_eq!(s.opacity, 1.0);
}
