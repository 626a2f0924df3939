//! Display backend trait
//!
//! Implemented by panel drivers. The renderer only ever draws into a
//! [`FrameBuffer`]; a backend copies that buffer to the panel.

use crate::framebuffer::FrameBuffer;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus error talking to the panel
    Communication,
    /// Panel was used before `init`
    NotInitialized,
}

/// Panel driver
#[allow(async_fn_in_trait)]
pub trait DisplayBackend {
    /// Run the panel power-up sequence
    async fn init(&mut self) -> Result<(), DisplayError>;

    /// Copy a whole frame to the panel
    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;

    /// Switch the panel on or off
    async fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError>;
}
