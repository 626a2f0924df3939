//! Button debouncing and key repeat
//!
//! Fed with the raw pin level and a millisecond timestamp at a fixed poll
//! rate. A level change only counts once it has been stable for
//! `debounce_ms`. Holding a key emits `Repeat` after `repeat_delay_ms`,
//! then every `repeat_interval_ms`.

use super::events::KeyAction;
use crate::config::UiSettings;

/// Debounce and repeat timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTiming {
    pub debounce_ms: u32,
    pub repeat_delay_ms: u32,
    pub repeat_interval_ms: u32,
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self::from(&UiSettings::default())
    }
}

impl From<&UiSettings> for ButtonTiming {
    fn from(ui: &UiSettings) -> Self {
        Self {
            debounce_ms: ui.debounce_ms,
            repeat_delay_ms: ui.repeat_delay_ms,
            repeat_interval_ms: ui.repeat_interval_ms,
        }
    }
}

/// Per-button state
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    timing: ButtonTiming,
    /// Debounced level (true = pressed)
    stable: bool,
    /// Last raw level seen
    candidate: bool,
    /// When the raw level last changed
    candidate_since_ms: u32,
    /// When the debounced press happened
    pressed_at_ms: u32,
    /// Hold time at which the next repeat fires
    next_repeat_ms: u32,
}

impl ButtonTracker {
    /// Create a tracker for a released button
    pub fn new(timing: ButtonTiming) -> Self {
        Self {
            timing,
            stable: false,
            candidate: false,
            candidate_since_ms: 0,
            pressed_at_ms: 0,
            next_repeat_ms: 0,
        }
    }

    /// Feed one sample
    ///
    /// Timestamps may wrap; only differences are used.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<KeyAction> {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.candidate_since_ms = now_ms;
        }

        if self.candidate != self.stable {
            if now_ms.wrapping_sub(self.candidate_since_ms) < self.timing.debounce_ms {
                return None;
            }
            self.stable = self.candidate;
            if self.stable {
                self.pressed_at_ms = now_ms;
                self.next_repeat_ms = self.timing.repeat_delay_ms;
                return Some(KeyAction::Press);
            }
            return Some(KeyAction::Release);
        }

        if self.stable {
            let held = now_ms.wrapping_sub(self.pressed_at_ms);
            if held >= self.next_repeat_ms {
                self.next_repeat_ms = self.next_repeat_ms.saturating_add(self.timing.repeat_interval_ms);
                return Some(KeyAction::Repeat);
            }
        }

        None
    }
}
