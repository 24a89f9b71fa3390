//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the animation engine to be hardware-agnostic.

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The ring and every renderer are generic over this trait.
pub trait LedDriver {
    /// Write a full frame to the LED strip
    fn write<const N: usize>(&mut self, colors: &[Rgb; N]);
}

impl<T: LedDriver> LedDriver for &mut T {
    fn write<const N: usize>(&mut self, colors: &[Rgb; N]) {
        (**self).write(colors);
    }
}
