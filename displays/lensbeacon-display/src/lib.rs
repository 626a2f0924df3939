//! Display side of the LensBeacon emulator
//!
//! This crate provides:
//! - `FrameBuffer`, a 128x64 monochrome page buffer usable as an
//!   `embedded-graphics` draw target
//! - `render`, which draws the menu or advertising screen from a
//!   [`UiSnapshot`](lensbeacon_core::UiSnapshot)
//! - `DisplayBackend`, the trait a panel driver implements to push a
//!   frame to the hardware
//!
//! Nothing here touches I2C directly, so the whole crate is host-testable.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod framebuffer;
pub mod layout;
pub mod render;

pub use backend::{DisplayBackend, DisplayError};
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use render::{render, render_blank};
