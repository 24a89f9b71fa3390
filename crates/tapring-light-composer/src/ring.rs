//! Fixed-size pixel buffer
//!
//! Writes only touch the in-memory frame. Nothing reaches the LEDs until
//! [`Ring::present`] hands the whole frame to the driver.

use crate::color::{OFF, Rgb, is_off};
use crate::driver::LedDriver;

pub struct Ring<D: LedDriver, const N: usize> {
    driver: D,
    pixels: [Rgb; N],
    /// Last presented frame was all black
    shown_dark: bool,
}

impl<D: LedDriver, const N: usize> Ring<D, N> {
    /// Create a ring with every pixel off
    ///
    /// The hardware state is unknown until the first present.
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            pixels: [OFF; N],
            shown_dark: false,
        }
    }

    /// Set one pixel, out-of-range indices are ignored
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels = [color; N];
    }

    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Push the current frame to the driver
    pub fn present(&mut self) {
        self.driver.write(&self.pixels);
        self.shown_dark = self.is_dark();
    }

    /// Clear and present, skipping the write when the LEDs are already dark
    pub fn blackout(&mut self) {
        if self.shown_dark && self.is_dark() {
            return;
        }
        self.clear();
        self.present();
    }

    /// Every pixel in the buffer is off
    pub fn is_dark(&self) -> bool {
        self.pixels.iter().all(|pixel| is_off(*pixel))
    }
}
