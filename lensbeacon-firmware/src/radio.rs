//! Channel transport between the controller and the BLE task
//!
//! [`RadioLink`] does the request tagging; this side only moves messages
//! and bounds each call in time, so a stuck or dead BLE task turns into
//! `RadioError::Unavailable` instead of a stalled controller.

use defmt::*;
use embassy_time::{with_deadline, with_timeout, Duration, Instant};

use lensbeacon_core::link::{RadioAnswer, RadioLink, RadioRequest, RadioTransport, Tagged};
use lensbeacon_core::traits::RadioError;

use crate::channels::{RADIO_REQUEST, RADIO_RESPONSE};

/// How long the BLE task gets to take a request and answer it
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

/// [`BeaconRadio`](lensbeacon_core::traits::BeaconRadio) backed by the BLE task
pub type BleRadio = RadioLink<ChannelTransport>;

pub fn ble_radio() -> BleRadio {
    RadioLink::new(ChannelTransport {
        deadline: Instant::now(),
    })
}

/// Static request/answer channels with a per-request deadline
pub struct ChannelTransport {
    deadline: Instant,
}

impl RadioTransport for ChannelTransport {
    async fn send(&mut self, request: Tagged<RadioRequest>) -> Result<(), RadioError> {
        let seq = request.seq;
        if with_timeout(RESPONSE_TIMEOUT, RADIO_REQUEST.send(request)).await.is_err() {
            warn!("BLE task did not take request #{}", seq);
            return Err(RadioError::Unavailable);
        }
        self.deadline = Instant::now() + RESPONSE_TIMEOUT;
        Ok(())
    }

    async fn receive(&mut self) -> Option<Tagged<RadioAnswer>> {
        match with_deadline(self.deadline, RADIO_RESPONSE.receive()).await {
            Ok(answer) => {
                trace!("Radio answer #{}: {:?}", answer.seq, answer.body);
                Some(answer)
            }
            Err(_) => {
                warn!("BLE task did not answer within {} ms", RESPONSE_TIMEOUT.as_millis());
                None
            }
        }
    }
}
