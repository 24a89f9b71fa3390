use smart_leds::RGB8;

use crate::math8::{fade8, scale8};

pub type Rgb = RGB8;

pub const OFF: Rgb = rgb_from_u32(0x00_00_00);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF_00);
pub const AMBER: Rgb = rgb_from_u32(0xFF_8C_00);

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Three-segment hue wheel over 0-255
///
/// 0-84 fades red into green, 85-169 green into blue, 170-255 blue into red.
pub const fn wheel(position: u8) -> Rgb {
    match position {
        0..=84 => Rgb {
            r: 255 - position * 3,
            g: position * 3,
            b: 0,
        },
        85..=169 => {
            let position = position - 85;
            Rgb {
                r: 0,
                g: 255 - position * 3,
                b: position * 3,
            }
        }
        _ => {
            let position = position - 170;
            Rgb {
                r: position * 3,
                g: 0,
                b: 255 - position * 3,
            }
        }
    }
}

/// Multiply every channel by `level / 255`
#[inline]
pub const fn fade(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: fade8(color.r, level),
        g: fade8(color.g, level),
        b: fade8(color.b, level),
    }
}

/// Dim a color with the fast `scale8` curve
#[inline]
pub const fn dim(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Check whether a color is fully off
#[inline]
pub const fn is_off(color: Rgb) -> bool {
    color.r == 0 && color.g == 0 && color.b == 0
}
