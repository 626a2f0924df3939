//! Input events delivered to the application loop

/// Physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Up,
    Down,
    Confirm,
    Back,
}

/// What happened to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key held past the repeat delay
    Repeat,
    /// Key let go
    Release,
}

/// One key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub key: Key,
    pub action: KeyAction,
}

impl InputEvent {
    /// Key press
    pub const fn press(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Press,
        }
    }

    /// Key repeat
    pub const fn repeat(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Repeat,
        }
    }

    /// Key release
    pub const fn release(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Release,
        }
    }

    /// Only presses and repeats drive the state machine
    pub fn is_actionable(&self) -> bool {
        matches!(self.action, KeyAction::Press | KeyAction::Repeat)
    }
}
