//! Display task
//!
//! Flushes the shared frame buffer to the SH1106 whenever the controller
//! signals a new frame, and switches the panel on or off on request.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use lensbeacon_display::DisplayBackend;

use crate::channels::{DISPLAY_POWER, FRAME, FRAME_READY};
use crate::sh1106::Sh1106;

/// Display driver on I2C0
pub type Display = Sh1106<I2c<'static, I2C0, Async>>;

/// Display task - pushes frames to the OLED
#[embassy_executor::task]
pub async fn display_task(mut display: Display) {
    info!("Display task started");

    let mut ready = init(&mut display).await;

    loop {
        let power = match select(FRAME_READY.wait(), DISPLAY_POWER.wait()).await {
            Either::First(()) => None,
            Either::Second(on) => Some(on),
        };

        if !ready {
            ready = init(&mut display).await;
            if !ready {
                continue;
            }
        }

        if let Some(on) = power {
            if let Err(e) = display.set_display_on(on).await {
                warn!("Display power change failed: {:?}", e);
            }
            continue;
        }

        // Copy out so the controller can draw the next frame meanwhile
        let frame = FRAME.lock().await.clone();
        if let Err(e) = display.flush(&frame).await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}

async fn init(display: &mut Display) -> bool {
    match display.init().await {
        Ok(()) => {
            info!("SH1106 initialized");
            true
        }
        Err(e) => {
            error!("SH1106 init failed: {:?}", e);
            false
        }
    }
}
