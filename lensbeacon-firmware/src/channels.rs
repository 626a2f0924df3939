//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use lensbeacon_core::input::InputEvent;
use lensbeacon_core::link::{RadioAnswer, RadioRequest, Tagged};
use lensbeacon_core::traits::Notification;
use lensbeacon_display::FrameBuffer;

/// Channel capacity for input events from the buttons
const INPUT_CHANNEL_SIZE: usize = 8;

/// Debounced key events from the buttons task
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Requests from the controller to the BLE task
pub static RADIO_REQUEST: Channel<CriticalSectionRawMutex, Tagged<RadioRequest>, 1> =
    Channel::new();

/// Answers from the BLE task, tagged with the request they belong to
pub static RADIO_RESPONSE: Channel<CriticalSectionRawMutex, Tagged<RadioAnswer>, 1> =
    Channel::new();

/// Beacon notifications for the LED task
pub static LED_CMD: Signal<CriticalSectionRawMutex, Notification> = Signal::new();

/// Shared frame buffer, drawn by the controller and flushed by the display task
pub static FRAME: Mutex<CriticalSectionRawMutex, FrameBuffer> = Mutex::new(FrameBuffer::new());

/// Signal that a new frame is ready to be flushed
pub static FRAME_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Panel power requests for the display task (true = on)
pub static DISPLAY_POWER: Signal<CriticalSectionRawMutex, bool> = Signal::new();
