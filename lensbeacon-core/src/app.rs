//! Application state
//!
//! `App` is the single owned state struct the event loop threads through:
//! it holds the beacon controller and the current screen. Each input event
//! is applied synchronously; the renderer reads a [`UiSnapshot`].

use crate::beacon::{BeaconController, BeaconError};
use crate::config::BeaconConfig;
use crate::input::InputEvent;
use crate::profile::DeviceIndex;
use crate::state::{Action, Event, Screen};
use crate::traits::{BeaconRadio, Notifier};

/// Whether the loop keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flow {
    Continue,
    Exit,
}

/// Outcome of one handled input event, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Event ignored in the current screen
    Ignored,
    /// Selection moved
    Selected(DeviceIndex),
    /// Beacon started for a profile
    Started(DeviceIndex),
    /// Beacon failed to start
    StartFailed(DeviceIndex, BeaconError),
    /// Beacon stopped
    Stopped,
    /// Exit requested
    Exit,
}

impl Outcome {
    /// Loop control derived from the outcome
    pub fn flow(&self) -> Flow {
        match self {
            Outcome::Exit => Flow::Exit,
            _ => Flow::Continue,
        }
    }
}

/// Read-only view of the application for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiSnapshot {
    pub screen: Screen,
    pub selected: DeviceIndex,
    pub advertising: bool,
    pub config: BeaconConfig,
}

/// Owned application state
pub struct App<R, N> {
    beacon: BeaconController<R, N>,
    screen: Screen,
}

impl<R: BeaconRadio, N: Notifier> App<R, N> {
    /// Create the application on the menu with the first profile selected
    pub fn new(radio: R, notifier: N, config: BeaconConfig) -> Self {
        Self {
            beacon: BeaconController::new(radio, notifier, config),
            screen: Screen::Menu,
        }
    }

    /// Current screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Selected profile
    pub fn selected(&self) -> DeviceIndex {
        self.beacon.selected()
    }

    /// Whether a beacon is on air
    pub fn is_advertising(&self) -> bool {
        self.beacon.is_advertising()
    }

    /// Beacon controller
    pub fn beacon(&self) -> &BeaconController<R, N> {
        &self.beacon
    }

    /// Snapshot for the renderer
    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            screen: self.screen,
            selected: self.beacon.selected(),
            advertising: self.beacon.is_advertising(),
            config: *self.beacon.config(),
        }
    }

    /// Apply one input event
    pub async fn handle_input(&mut self, event: InputEvent) -> Flow {
        self.apply(event).await.flow()
    }

    /// Apply one input event and report what happened
    pub async fn apply(&mut self, event: InputEvent) -> Outcome {
        if !event.is_actionable() {
            return Outcome::Ignored;
        }

        let Some(action) = self.screen.action_for(event.key) else {
            return Outcome::Ignored;
        };

        match action {
            Action::SelectPrevious => {
                let next = self.beacon.selected().previous();
                self.beacon.select(next);
                Outcome::Selected(next)
            }
            Action::SelectNext => {
                let next = self.beacon.selected().next();
                self.beacon.select(next);
                Outcome::Selected(next)
            }
            Action::StartBeacon => {
                let device = self.beacon.selected();
                match self.beacon.start(device).await {
                    Ok(()) => {
                        self.screen = self.screen.transition(Event::StartSucceeded);
                        Outcome::Started(device)
                    }
                    Err(e) => {
                        self.screen = self.screen.transition(Event::StartFailed);
                        Outcome::StartFailed(device, e)
                    }
                }
            }
            Action::StopBeacon => {
                self.beacon.stop().await;
                self.screen = self.screen.transition(Event::Stopped);
                Outcome::Stopped
            }
            Action::Exit => Outcome::Exit,
        }
    }

    /// Tear the application down, stopping the radio first
    pub async fn shutdown(self) -> (R, N) {
        self.beacon.shutdown().await
    }
}
