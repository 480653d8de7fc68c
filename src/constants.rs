//! DOM hooks the effects attach to.
//!
//! Markup and stylesheet own these names; keeping them here keeps string
//! literals out of the wiring code.

// Render target
pub const CANVAS_ID: &str = "webgl-canvas";

// Floating shapes
pub const SHAPES_CONTAINER_ID: &str = "floating-shapes-container";
pub const SHAPE_CLASS: &str = "floating-shape";

// Theme
pub const NEO_BODY_CLASS: &str = "neo-theme";

// Cursor and interaction
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_OUTLINE_SELECTOR: &str = ".cursor-outline";
pub const MAGNET_SELECTOR: &str = "a, button, .btn-primary, .project-link";
pub const HOVERING_BODY_CLASS: &str = "hovering";
pub const REVEAL_SELECTOR: &str = "section, .project-card, .bio-item, .contact-wrapper, .intro, .profile, .hero-title, .hero-subtitle, .cta-group";
pub const REVEAL_CLASS: &str = "reveal-on-scroll";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const HEADER_SELECTOR: &str = ".page-header";
pub const STICKY_CLASS: &str = "sticky";

// Curtain
pub const CURTAIN_ID: &str = "page-transition-curtain";
pub const CURTAIN_TRANSITION: &str = "opacity 0.6s cubic-bezier(0.25, 1, 0.5, 1)";

// Intro
pub const ENTRANCE_SELECTOR: &str =
    ".profile-card, .info-section, .timeline-flow-item, .project-card, .contact-card";
pub const STAT_SELECTOR: &str = ".stats-num";

// Audio unlock gestures
pub const UNLOCK_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];
