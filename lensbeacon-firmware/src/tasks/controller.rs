//! Main controller task
//!
//! Owns the [`App`] and runs the event loop: wait for a key with the
//! refresh tick as timeout, apply it, redraw. On exit the app is shut down
//! (radio stopped first), the screen goes blank and the panel is switched
//! off. Confirm switches it back on and relaunches a fresh app.

use defmt::*;
use embassy_time::{with_timeout, Duration};

use lensbeacon_core::adv::{build_payload, manufacturer_data, HexBytes};
use lensbeacon_core::config::Settings;
use lensbeacon_core::input::{InputEvent, Key};
use lensbeacon_core::traits::RadioError;
use lensbeacon_core::{App, Flow, Outcome, DEVICE_COUNT};
use lensbeacon_display::{render, render_blank};

use crate::channels::{DISPLAY_POWER, FRAME, FRAME_READY, INPUT_CHANNEL};
use crate::radio::{ble_radio, BleRadio};
use crate::tasks::led::LedNotifier;

type EmulatorApp = App<BleRadio, LedNotifier>;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(settings: Settings) {
    info!("Controller task started");

    let refresh = Duration::from_millis(settings.ui.refresh_ms as u64);

    // Kept across relaunches so request numbers keep counting up
    let mut radio = ble_radio();

    loop {
        let mut app = App::new(radio, LedNotifier, settings.beacon);
        info!("Emulator ready, {} profiles", DEVICE_COUNT);

        run(&mut app, refresh).await;

        info!("Exit requested, shutting down");
        (radio, _) = app.shutdown().await;
        if radio.stale_answers() > 0 {
            debug!("Dropped {} late radio answers", radio.stale_answers());
        }
        show_blank().await;
        DISPLAY_POWER.signal(false);

        wait_for_relaunch().await;
        info!("Relaunching");
        DISPLAY_POWER.signal(true);
    }
}

/// Event loop; returns when the user asks to exit
async fn run(app: &mut EmulatorApp, refresh: Duration) {
    draw(app).await;

    loop {
        // A timeout is the periodic refresh, not an error
        if let Ok(event) = with_timeout(refresh, INPUT_CHANNEL.receive()).await {
            debug!("Input: {:?}", event);
            let outcome = app.apply(event).await;
            log_outcome(&outcome);
            if outcome.flow() == Flow::Exit {
                return;
            }
        }

        draw(app).await;
    }
}

fn log_outcome(outcome: &Outcome) {
    match *outcome {
        Outcome::Ignored => trace!("Input ignored"),
        Outcome::Selected(device) => debug!("Selected {}", device.profile().short_name),
        Outcome::Started(device) => {
            let profile = device.profile();
            info!(
                "BLE beacon started - {} ({})",
                profile.long_name, profile.company_id_label
            );
            let payload = build_payload(profile);
            debug!("Payload: {}", Display2Format(&HexBytes(&payload)));
            if let Some((company, _)) = manufacturer_data(&payload) {
                debug!("Detector sees company ID {=u16:#x}", company);
            }
        }
        Outcome::StartFailed(device, e) => {
            let profile = device.profile();
            error!(
                "BLE beacon FAILED - {} ({}): {:?}",
                profile.long_name, profile.company_id_label, e
            );
            if e.radio_error() == RadioError::Unavailable {
                warn!("BLE task not responding");
            }
        }
        Outcome::Stopped => info!("BLE beacon stopped"),
        Outcome::Exit => {}
    }
}

/// Draw the current screen and hand it to the display task
async fn draw(app: &EmulatorApp) {
    let snapshot = app.snapshot();
    {
        let mut frame = FRAME.lock().await;
        // Drawing into the frame buffer cannot fail
        let _ = render(&snapshot, &mut *frame);
    }
    FRAME_READY.signal(());
}

async fn show_blank() {
    {
        let mut frame = FRAME.lock().await;
        let _ = render_blank(&mut *frame);
    }
    FRAME_READY.signal(());
}

/// Wait for a Confirm press, discarding everything else
async fn wait_for_relaunch() {
    loop {
        let event = INPUT_CHANNEL.receive().await;
        if event == InputEvent::press(Key::Confirm) {
            return;
        }
        trace!("Ignored while exited: {:?}", event);
    }
}
