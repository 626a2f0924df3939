//! State machine definition
//!
//! `Advertising` is only reachable through `StartSucceeded`, so the screen
//! never claims a beacon the radio did not confirm.

use super::events::{Action, Event};
use crate::input::Key;

/// UI screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Profile list
    #[default]
    Menu,
    /// Beacon on air
    Advertising,
}

impl Screen {
    /// Map an actionable key to the work it requests in this screen
    ///
    /// Returns `None` for keys that are ignored here.
    pub fn action_for(self, key: Key) -> Option<Action> {
        use Key::*;
        use Screen::*;

        match (self, key) {
            (Menu, Up) => Some(Action::SelectPrevious),
            (Menu, Down) => Some(Action::SelectNext),
            (Menu, Confirm) => Some(Action::StartBeacon),
            (Menu, Back) => Some(Action::Exit),

            (Advertising, Back) => Some(Action::StopBeacon),

            // Everything else is ignored while advertising
            (Advertising, _) => None,
        }
    }

    /// Process an event and return the next screen
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Screen::*;

        match (self, event) {
            (Menu, StartSucceeded) => Advertising,
            (Menu, StartFailed) => Menu,
            (Advertising, Stopped) => Menu,

            // Default: stay on the current screen
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys() {
        assert_eq!(Screen::Menu.action_for(Key::Up), Some(Action::SelectPrevious));
        assert_eq!(Screen::Menu.action_for(Key::Down), Some(Action::SelectNext));
        assert_eq!(Screen::Menu.action_for(Key::Confirm), Some(Action::StartBeacon));
        assert_eq!(Screen::Menu.action_for(Key::Back), Some(Action::Exit));
    }

    #[test]
    fn test_advertising_only_back() {
        assert_eq!(Screen::Advertising.action_for(Key::Back), Some(Action::StopBeacon));
        for key in [Key::Up, Key::Down, Key::Confirm] {
            assert_eq!(Screen::Advertising.action_for(key), None);
        }
    }

    #[test]
    fn test_start_outcomes() {
        assert_eq!(Screen::Menu.transition(Event::StartSucceeded), Screen::Advertising);
        assert_eq!(Screen::Menu.transition(Event::StartFailed), Screen::Menu);
    }

    #[test]
    fn test_stop_returns_to_menu() {
        assert_eq!(Screen::Advertising.transition(Event::Stopped), Screen::Menu);
    }

    #[test]
    fn test_unrelated_events_ignored() {
        assert_eq!(Screen::Menu.transition(Event::Stopped), Screen::Menu);
        assert_eq!(Screen::Advertising.transition(Event::StartSucceeded), Screen::Advertising);
        assert_eq!(Screen::Advertising.transition(Event::StartFailed), Screen::Advertising);
    }
}
