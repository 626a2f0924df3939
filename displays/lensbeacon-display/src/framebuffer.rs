//! Monochrome frame buffer
//!
//! 1 bit per pixel, laid out the way SH1106/SSD1306 controllers expect:
//! eight pages of 128 columns, each byte a vertical strip of 8 pixels with
//! bit 0 at the top.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Width in pixels
pub const WIDTH: usize = 128;

/// Height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 page-organised frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear_all(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Read one pixel; out-of-range coordinates read as off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Set one pixel; out-of-range coordinates are clipped
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let bit = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }

    /// All pages, top to bottom
    pub fn pages(&self) -> impl Iterator<Item = &[u8; WIDTH]> {
        self.pages.iter()
    }

    /// True when no pixel is lit
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.iter().all(|&b| b == 0))
    }

    /// Number of lit pixels inside a rectangle
    pub fn count_lit(&self, x: usize, y: usize, width: usize, height: usize) -> usize {
        let mut lit = 0;
        for py in y..(y + height).min(HEIGHT) {
            for px in x..(x + width).min(WIDTH) {
                if self.pixel(px, py) {
                    lit += 1;
                }
            }
        }
        lit
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(fill);
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        let lit = self.count_lit(0, 0, WIDTH, HEIGHT);
        defmt::write!(f, "FrameBuffer[{}x{}, {} lit]", WIDTH, HEIGHT, lit);
    }
}
