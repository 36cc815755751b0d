//! Input normalization: wheel, touch and keyboard events to a signed delta
//!
//! Deltas are in pixel-equivalent units; positive moves the intro forward.

use crate::config::IntroConfig;

/// Keys the intro listens to. Anything else is [`NavKey::Other`] and is
/// never intercepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
    Other,
}

impl NavKey {
    /// Parse a DOM-style key name ("ArrowDown", " ", "Space", ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowUp" => NavKey::ArrowUp,
            "PageDown" => NavKey::PageDown,
            "PageUp" => NavKey::PageUp,
            " " | "Space" => NavKey::Space,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            _ => NavKey::Other,
        }
    }

    /// +1 for keys that advance, -1 for keys that rewind, 0 otherwise
    pub fn direction(self) -> i8 {
        match self {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space | NavKey::End => 1,
            NavKey::ArrowUp | NavKey::PageUp | NavKey::Home => -1,
            NavKey::Other => 0,
        }
    }
}

/// Raw input as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Wheel with vertical delta
    Wheel { delta_y: f64 },
    /// First touch point of a gesture (`None` if the event carried no touches)
    TouchStart { y: Option<f64> },
    /// Touch movement sample
    TouchMove { y: Option<f64> },
    /// Key press
    Key(NavKey),
}

/// Wheel delta is used as-is
#[inline]
pub fn wheel_delta(delta_y: f64) -> f64 {
    delta_y
}

/// Incremental touch delta between two samples
#[inline]
pub fn touch_delta(previous_y: f64, current_y: f64, amplification: f64) -> f64 {
    (previous_y - current_y) * amplification
}

/// Fixed key delta, `None` for keys outside the allow-list
#[inline]
pub fn key_delta(key: NavKey, magnitude: f64) -> Option<f64> {
    match key.direction() {
        0 => None,
        d => Some(f64::from(d) * magnitude),
    }
}

/// Converts [`InputEvent`]s into deltas. Holds the previous touch sample so
/// touch deltas stay incremental.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    touch_amplification: f64,
    key_delta: f64,
    last_touch_y: f64,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new(&IntroConfig::default())
    }
}

impl InputNormalizer {
    pub fn new(config: &IntroConfig) -> Self {
        Self {
            touch_amplification: config.touch_amplification,
            key_delta: config.key_delta,
            last_touch_y: 0.0,
        }
    }

    /// Normalize one event. Touch-start only records the reference point.
    pub fn normalize(&mut self, event: InputEvent) -> Option<f64> {
        match event {
            InputEvent::Wheel { delta_y } => Some(wheel_delta(delta_y)),
            InputEvent::TouchStart { y } => {
                self.last_touch_y = y.unwrap_or(0.0);
                None
            }
            InputEvent::TouchMove { y } => {
                let y = y.unwrap_or(self.last_touch_y);
                let delta = touch_delta(self.last_touch_y, y, self.touch_amplification);
                self.last_touch_y = y;
                Some(delta)
            }
            InputEvent::Key(key) => key_delta(key, self.key_delta),
        }
    }
}
