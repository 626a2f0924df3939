//! Button polling task
//!
//! Samples the four push buttons at a fixed rate and feeds the levels
//! through a [`ButtonTracker`] each. Buttons are wired to ground with the
//! internal pull-ups enabled, so a low level means pressed.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use lensbeacon_core::input::{ButtonTiming, ButtonTracker, InputEvent, Key};

use crate::channels::INPUT_CHANNEL;

/// Poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 5;

/// Key reported by each pin, in the order the pins are passed in
pub const KEYS: [Key; 4] = [Key::Up, Key::Down, Key::Confirm, Key::Back];

/// Buttons task - debounces the pins and queues key events
#[embassy_executor::task]
pub async fn buttons_task(pins: [Input<'static>; 4], timing: ButtonTiming) {
    info!("Buttons task started");

    let mut trackers: [ButtonTracker; 4] = core::array::from_fn(|_| ButtonTracker::new(timing));
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;
        let now_ms = Instant::now().as_millis() as u32;

        for ((pin, tracker), key) in pins.iter().zip(trackers.iter_mut()).zip(KEYS) {
            let Some(action) = tracker.update(pin.is_low(), now_ms) else {
                continue;
            };
            let event = InputEvent { key, action };
            trace!("Input: {:?}", event);
            if INPUT_CHANNEL.try_send(event).is_err() {
                warn!("Input queue full, dropping {:?}", event);
            }
        }
    }
}
