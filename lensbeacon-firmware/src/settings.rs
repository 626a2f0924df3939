//! Settings embedded at build time
//!
//! `build.rs` validates `lensbeacon.toml` and stores it as postcard bytes.
//! A blob that fails to decode or validate at boot is replaced by the
//! defaults.

use defmt::*;

use lensbeacon_core::config::Settings;

/// Postcard-encoded settings written by the build script
static SETTINGS_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/settings.bin"));

/// Decode the embedded settings, falling back to the defaults
pub fn load() -> Settings {
    let settings = match postcard::from_bytes::<Settings>(SETTINGS_BLOB) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to decode embedded settings: {:?}", Debug2Format(&e));
            warn!("Using default settings");
            return Settings::default();
        }
    };

    if let Err(e) = settings.validate() {
        error!("Embedded settings invalid: {:?}", e);
        warn!("Using default settings");
        return Settings::default();
    }

    info!(
        "Settings loaded: {}-{} ms, {} dBm, channels {:#b}",
        settings.beacon.interval_min_ms,
        settings.beacon.interval_max_ms,
        settings.beacon.tx_power.dbm(),
        settings.beacon.channels.bits()
    );
    settings
}
