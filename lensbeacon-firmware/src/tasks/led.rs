//! LED notification task
//!
//! Blinks the Pico W on-board LED (CYW43 WL_GPIO0) while a beacon is on
//! air. The controller side is [`LedNotifier`], which only raises a signal
//! and never waits.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};

use lensbeacon_core::config::NotifySettings;
use lensbeacon_core::traits::{Notification, Notifier};

use crate::channels::LED_CMD;

/// CYW43 GPIO wired to the on-board LED
const LED_GPIO: u8 = 0;

/// [`Notifier`] that forwards to the LED task
pub struct LedNotifier;

impl Notifier for LedNotifier {
    fn notify(&mut self, notification: Notification) {
        LED_CMD.signal(notification);
    }
}

/// LED task - blinks while advertising
#[embassy_executor::task]
pub async fn led_task(mut control: cyw43::Control<'static>, settings: NotifySettings) {
    info!("LED task started");
    control.gpio_set(LED_GPIO, false).await;

    loop {
        if LED_CMD.wait().await != Notification::AdvertisingStarted {
            continue;
        }
        if !settings.led {
            continue;
        }

        debug!("LED blinking");
        blink_until_stopped(&mut control, &settings).await;
        control.gpio_set(LED_GPIO, false).await;
        debug!("LED off");
    }
}

/// Blink until an `AdvertisingStopped` notification arrives
async fn blink_until_stopped(control: &mut cyw43::Control<'static>, settings: &NotifySettings) {
    let on = Duration::from_millis(settings.blink_on_ms as u64);
    let off = Duration::from_millis(settings.blink_period_ms.saturating_sub(settings.blink_on_ms) as u64);

    loop {
        for (level, hold) in [(true, on), (false, off)] {
            control.gpio_set(LED_GPIO, level).await;
            if let Either::First(Notification::AdvertisingStopped) =
                select(LED_CMD.wait(), Timer::after(hold)).await
            {
                return;
            }
        }
    }
}
