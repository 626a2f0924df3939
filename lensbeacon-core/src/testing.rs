//! In-memory radio and notifier for host tests

use heapless::Vec;

use crate::adv::AdvData;
use crate::config::BeaconConfig;
use crate::traits::{BeaconRadio, Notification, Notifier, RadioError};

/// One recorded radio call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioCall {
    SetData(AdvData),
    SetConfig(BeaconConfig),
    Start,
    Stop,
}

/// Radio that records every call and can be told to fail
#[derive(Debug, Default)]
pub struct MockRadio {
    pub calls: Vec<RadioCall, 256>,
    pub active: bool,
    pub fail_data: bool,
    pub fail_config: bool,
    pub fail_start: bool,
    /// Set when data or config was changed while advertising
    pub reconfigured_live: bool,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_start() -> Self {
        Self {
            fail_start: true,
            ..Self::default()
        }
    }

    pub fn stop_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == RadioCall::Stop).count()
    }

    pub fn start_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == RadioCall::Start).count()
    }

    /// Advertisement data of the most recent `SetData`
    pub fn last_data(&self) -> Option<&[u8]> {
        self.calls.iter().rev().find_map(|c| match c {
            RadioCall::SetData(d) => Some(d.as_slice()),
            _ => None,
        })
    }

    fn record(&mut self, call: RadioCall) {
        if self.calls.push(call).is_err() {
            panic!("MockRadio call log full");
        }
    }
}

impl BeaconRadio for MockRadio {
    async fn set_advertisement_data(&mut self, data: &[u8]) -> Result<(), RadioError> {
        self.reconfigured_live |= self.active;
        let data = AdvData::from_slice(data).map_err(|_| RadioError::DataTooLong)?;
        self.record(RadioCall::SetData(data));
        if self.fail_data {
            return Err(RadioError::Rejected);
        }
        Ok(())
    }

    async fn set_config(&mut self, config: &BeaconConfig) -> Result<(), RadioError> {
        self.reconfigured_live |= self.active;
        self.record(RadioCall::SetConfig(*config));
        if self.fail_config {
            return Err(RadioError::Unsupported);
        }
        Ok(())
    }

    async fn start_advertising(&mut self) -> Result<(), RadioError> {
        self.record(RadioCall::Start);
        if self.fail_start {
            return Err(RadioError::Rejected);
        }
        if self.active {
            return Err(RadioError::Busy);
        }
        self.active = true;
        Ok(())
    }

    async fn stop_advertising(&mut self) {
        self.record(RadioCall::Stop);
        self.active = false;
    }
}

/// Notifier that remembers what it was told
#[derive(Debug, Default)]
pub struct MockNotifier {
    pub seen: Vec<Notification, 256>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, n: Notification) -> usize {
        self.seen.iter().filter(|s| **s == n).count()
    }
}

impl Notifier for MockNotifier {
    fn notify(&mut self, notification: Notification) {
        if self.seen.push(notification).is_err() {
            panic!("MockNotifier log full");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_long_sessions_are_fully_recorded() {
        let mut radio = MockRadio::new();
        for _ in 0..100 {
            block_on(radio.start_advertising()).unwrap();
            block_on(radio.stop_advertising());
        }
        assert_eq!(radio.start_count(), 100);
        assert_eq!(radio.stop_count(), 100);
    }

    #[test]
    #[should_panic(expected = "call log full")]
    fn test_overflow_is_loud() {
        let mut radio = MockRadio::new();
        for _ in 0..=256 {
            block_on(radio.stop_advertising());
        }
    }
}
