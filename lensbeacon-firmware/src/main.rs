//! LensBeacon - smart-glasses BLE advertising emulator
//!
//! Firmware for a Raspberry Pi Pico W with an SH1106 128x64 OLED on I2C0
//! and four push buttons. Pick a profile, press Confirm, and the board
//! advertises that manufacturer's signature until Back is pressed.
//!
//! Pin map:
//! - GP4/GP5: OLED SDA/SCL
//! - GP2/GP3/GP6/GP7: Up/Down/Confirm/Back (to ground)
//! - GP23/24/25/29: CYW43439 (power, data, chip select, clock)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{DMA_CH0, I2C0, PIO0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use static_cell::StaticCell;
use trouble_host::prelude::ExternalController;
use {defmt_rtt as _, panic_probe as _};

use lensbeacon_core::input::ButtonTiming;

mod channels;
mod radio;
mod settings;
mod sh1106;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

#[embassy_executor::task]
async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, cyw43_pio::PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("LensBeacon firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let settings = settings::load();

    #[cfg(feature = "skip-cyw43-firmware")]
    let (fw, clm, btfw) = (&[], &[], &[]);

    #[cfg(not(feature = "skip-cyw43-firmware"))]
    let (fw, clm, btfw) = {
        let fw = include_bytes!("../cyw43-firmware/43439A0.bin");
        let clm = include_bytes!("../cyw43-firmware/43439A0_clm.bin");
        let btfw = include_bytes!("../cyw43-firmware/43439A0_btfw.bin");
        (fw, clm, btfw)
    };

    // CYW43 bus
    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = cyw43_pio::PioSpi::new(
        &mut pio.common,
        pio.sm0,
        cyw43_pio::DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (_net_device, bt_device, mut control, runner) =
        cyw43::new_with_bluetooth(state, pwr, spi, fw, btfw).await;
    spawner.spawn(cyw43_task(runner)).unwrap();
    control.init(clm).await;
    info!("CYW43 initialized");

    let controller: tasks::BleController = ExternalController::new(bt_device);

    // OLED on I2C0
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    let display = sh1106::Sh1106::new(i2c);

    // Buttons, active low
    let buttons = [
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
    ];

    // Spawn tasks
    spawner
        .spawn(tasks::ble_task(controller, settings.beacon.address))
        .unwrap();
    spawner.spawn(tasks::led_task(control, settings.notify)).unwrap();
    spawner.spawn(tasks::display_task(display)).unwrap();
    spawner
        .spawn(tasks::buttons_task(buttons, ButtonTiming::from(&settings.ui)))
        .unwrap();
    spawner.spawn(tasks::controller_task(settings)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
