//! Beacon controller implementation
//!
//! `Idle -> (start ok) -> Advertising -> (stop) -> Idle`. A failed start
//! leaves the controller in `Idle`. Every start stops the radio first, so
//! a live beacon is never reconfigured.

use super::session::{BeaconSession, BeaconState};
use crate::adv::build_payload;
use crate::config::BeaconConfig;
use crate::profile::DeviceIndex;
use crate::traits::{BeaconRadio, Notification, Notifier, RadioError};

/// Reasons a beacon failed to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeaconError {
    /// Radio refused the advertisement data
    DataRejected(RadioError),
    /// Radio refused the advertising configuration
    ConfigRejected(RadioError),
    /// Radio did not start advertising
    StartFailed(RadioError),
}

impl BeaconError {
    /// Underlying radio error
    pub fn radio_error(&self) -> RadioError {
        match *self {
            BeaconError::DataRejected(e)
            | BeaconError::ConfigRejected(e)
            | BeaconError::StartFailed(e) => e,
        }
    }
}

/// Drives a [`BeaconRadio`] through start/stop
pub struct BeaconController<R, N> {
    radio: R,
    notifier: N,
    config: BeaconConfig,
    session: BeaconSession,
}

impl<R: BeaconRadio, N: Notifier> BeaconController<R, N> {
    /// Create a controller with a fresh session
    pub fn new(radio: R, notifier: N, config: BeaconConfig) -> Self {
        Self {
            radio,
            notifier,
            config,
            session: BeaconSession::new(),
        }
    }

    /// Current session
    pub fn session(&self) -> &BeaconSession {
        &self.session
    }

    /// Current sub-state
    pub fn state(&self) -> BeaconState {
        self.session.state()
    }

    /// Whether the last start succeeded and no stop followed
    pub fn is_advertising(&self) -> bool {
        self.session.advertising
    }

    /// Selected profile
    pub fn selected(&self) -> DeviceIndex {
        self.session.selected
    }

    /// Advertising configuration applied on start
    pub fn config(&self) -> &BeaconConfig {
        &self.config
    }

    /// Access the radio
    pub fn radio(&self) -> &R {
        &self.radio
    }

    #[cfg(test)]
    pub(crate) fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Access the notifier
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Change the selected profile
    ///
    /// Does not touch the radio; the selection takes effect on the next start.
    pub fn select(&mut self, device: DeviceIndex) {
        self.session.selected = device;
    }

    /// Start advertising a profile
    ///
    /// Stops any running beacon, loads the payload and configuration, then
    /// starts the radio. On error the session stays idle and no "started"
    /// notification is sent.
    pub async fn start(&mut self, device: DeviceIndex) -> Result<(), BeaconError> {
        self.session.selected = device;

        self.radio.stop_advertising().await;
        self.session.advertising = false;

        let payload = build_payload(device.profile());
        self.radio
            .set_advertisement_data(&payload)
            .await
            .map_err(BeaconError::DataRejected)?;
        self.radio
            .set_config(&self.config)
            .await
            .map_err(BeaconError::ConfigRejected)?;
        self.radio
            .start_advertising()
            .await
            .map_err(BeaconError::StartFailed)?;

        self.session.advertising = true;
        self.notifier.notify(Notification::AdvertisingStarted);
        Ok(())
    }

    /// Stop advertising
    ///
    /// Safe to call when nothing is running.
    pub async fn stop(&mut self) {
        self.radio.stop_advertising().await;
        self.session.advertising = false;
        self.notifier.notify(Notification::AdvertisingStopped);
    }

    /// Tear down the controller
    ///
    /// Issues exactly one radio stop: a full [`stop`](Self::stop) when a
    /// beacon is running, a silent one otherwise.
    pub async fn shutdown(mut self) -> (R, N) {
        if self.session.advertising {
            self.stop().await;
        } else {
            self.radio.stop_advertising().await;
        }
        (self.radio, self.notifier)
    }
}
