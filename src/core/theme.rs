// Hidden two-state theme switch with keystroke and triple-tap triggers.
//
// The switch owns the current `Theme` and notifies subscribers on every
// transition. Subscribers must not call back into the switch.

use super::constants::{
    KEY_BUFFER_LEN, NEO_MARKER, PARTICLE_COLOR, PARTICLE_NEO_COLOR, SECRET_CODES, TAPS_TO_TOGGLE,
    TAP_WINDOW_MS,
};
use smallvec::SmallVec;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Neo,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Default => Theme::Neo,
            Theme::Neo => Theme::Default,
        }
    }

    pub fn is_neo(self) -> bool {
        self == Theme::Neo
    }

    /// Particle colour for this theme as `0xRRGGBB`.
    pub fn particle_color(self) -> u32 {
        match self {
            Theme::Default => PARTICLE_COLOR,
            Theme::Neo => PARTICLE_NEO_COLOR,
        }
    }
}

/// What caused a theme transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    Location,
    Keys,
    Taps,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    pub source: ChangeSource,
}

/// Trailing window of recent key names.
#[derive(Debug, Default)]
pub struct KeyBuffer {
    keys: VecDeque<String>,
}

impl KeyBuffer {
    /// Record a key. Returns true (and clears the buffer) when the joined
    /// window contains any secret code.
    pub fn push(&mut self, key: &str) -> bool {
        self.keys.push_back(key.to_string());
        while self.keys.len() > KEY_BUFFER_LEN {
            self.keys.pop_front();
        }
        let stream = self.stream();
        if SECRET_CODES.iter().any(|code| stream.contains(code)) {
            self.keys.clear();
            return true;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn stream(&self) -> String {
        self.keys.iter().map(String::as_str).collect()
    }
}

/// Counts touch-ends closer together than [`TAP_WINDOW_MS`].
#[derive(Debug, Default)]
pub struct TapDetector {
    last_tap_ms: f64,
    count: u32,
}

impl TapDetector {
    /// Register a tap at `now_ms`. Returns true on the tap that completes a
    /// triple tap; the count then restarts at zero.
    pub fn tap(&mut self, now_ms: f64) -> bool {
        let gap = now_ms - self.last_tap_ms;
        self.last_tap_ms = now_ms;
        if gap > 0.0 && gap < TAP_WINDOW_MS {
            self.count += 1;
            if self.count >= TAPS_TO_TOGGLE {
                self.count = 0;
                return true;
            }
        } else {
            self.count = 1;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

pub type Subscriber = Box<dyn FnMut(&ThemeChange)>;

#[derive(Default)]
pub struct ThemeSwitch {
    theme: Theme,
    keys: KeyBuffer,
    taps: TapDetector,
    subscribers: SmallVec<[Subscriber; 4]>,
}

impl ThemeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn keys(&self) -> &KeyBuffer {
        &self.keys
    }

    pub fn taps(&self) -> &TapDetector {
        &self.taps
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&ThemeChange) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Feed a `keydown` key name; toggles on a secret-code match.
    pub fn on_key(&mut self, key: &str) -> Option<ThemeChange> {
        if self.keys.push(key) {
            Some(self.toggle(ChangeSource::Keys))
        } else {
            None
        }
    }

    /// Feed a `touchend` timestamp; toggles on a triple tap.
    pub fn on_tap(&mut self, now_ms: f64) -> Option<ThemeChange> {
        if self.taps.tap(now_ms) {
            Some(self.toggle(ChangeSource::Taps))
        } else {
            None
        }
    }

    pub fn toggle(&mut self, source: ChangeSource) -> ThemeChange {
        let next = self.theme.flipped();
        self.apply(next, source)
    }

    /// Move to `theme` and notify, even if it is already current.
    pub fn apply(&mut self, theme: Theme, source: ChangeSource) -> ThemeChange {
        self.theme = theme;
        let change = ThemeChange { theme, source };
        for sub in self.subscribers.iter_mut() {
            sub(&change);
        }
        change
    }
}

/// Theme requested by the page location: `#neo` or a `/neo` path segment.
pub fn theme_from_location(hash: &str, pathname: &str) -> Theme {
    let marker_hash = format!("#{NEO_MARKER}");
    let marker_path = format!("/{NEO_MARKER}");
    if hash == marker_hash || pathname.contains(&marker_path) {
        Theme::Neo
    } else {
        Theme::Default
    }
}

/// How the location should change to persist a theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationUpdate {
    SetHash(&'static str),
    /// Push a history entry for this URL (path and query, no fragment).
    PushUrl(String),
}

pub fn location_update(theme: Theme, pathname: &str, search: &str) -> LocationUpdate {
    match theme {
        Theme::Neo => LocationUpdate::SetHash(NEO_MARKER),
        Theme::Default => LocationUpdate::PushUrl(format!("{pathname}{search}")),
    }
}
