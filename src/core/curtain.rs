// Page-transition curtain phases and link qualification.

/// The parts of an anchor that decide whether navigation is intercepted.
#[derive(Clone, Debug, Default)]
pub struct LinkInfo<'a> {
    pub hostname: &'a str,
    pub hash: &'a str,
    pub target: &'a str,
    pub href: &'a str,
}

/// Same-origin, fragment-free, same-context links that lead somewhere else.
pub fn intercepts(link: &LinkInfo<'_>, page_hostname: &str, page_href: &str) -> bool {
    link.hostname == page_hostname
        && link.hash.is_empty()
        && link.target != "_blank"
        && link.href != page_href
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurtainPhase {
    /// Opaque while the page paints for the first time.
    Covering,
    /// Opacity set to 0; CSS transition running.
    Revealing,
    /// Faded out and removed from layout.
    Hidden,
    /// Faded back in; navigation to `href` pending.
    Closing { href: String },
}

/// Styles the DOM side should apply after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurtainStyle {
    pub opacity: f32,
    pub displayed: bool,
}

#[derive(Clone, Debug)]
pub struct Curtain {
    phase: CurtainPhase,
    style: CurtainStyle,
}

impl Default for Curtain {
    fn default() -> Self {
        Self {
            phase: CurtainPhase::Covering,
            style: CurtainStyle {
                opacity: 1.0,
                displayed: true,
            },
        }
    }
}

impl Curtain {
    pub fn phase(&self) -> &CurtainPhase {
        &self.phase
    }

    pub fn style(&self) -> CurtainStyle {
        self.style
    }

    /// Start fading out. Ignored once a navigation is pending.
    pub fn reveal(&mut self) -> CurtainStyle {
        if self.phase == CurtainPhase::Covering {
            self.phase = CurtainPhase::Revealing;
            self.style.opacity = 0.0;
        }
        self.style
    }

    /// The opacity transition ended. Only a finished fade-out hides the
    /// curtain.
    pub fn transition_ended(&mut self) -> CurtainStyle {
        if self.phase == CurtainPhase::Revealing && self.style.opacity == 0.0 {
            self.phase = CurtainPhase::Hidden;
            self.style.displayed = false;
        }
        self.style
    }

    /// Cover the page before navigating to `href`.
    pub fn close(&mut self, href: &str) -> CurtainStyle {
        self.phase = CurtainPhase::Closing {
            href: href.to_string(),
        };
        self.style = CurtainStyle {
            opacity: 1.0,
            displayed: true,
        };
        self.style
    }

    pub fn pending_navigation(&self) -> Option<&str> {
        match &self.phase {
            CurtainPhase::Closing { href } => Some(href),
            _ => None,
        }
    }
}
