//! Fixed-width decimal color codes
//!
//! The server sends colors as `"RRRGGGBBB"`: three zero-padded decimal
//! channels. Decoding keeps the raw 0-999 values, [`ColorCode::to_rgb`]
//! clamps them for the LEDs.

use core::fmt::Write as _;

use heapless::String;
use tapring_light_composer::Rgb;

pub const COLOR_CODE_LEN: usize = 9;

const CHANNEL_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCodeError {
    /// Not exactly nine ASCII digits
    Malformed,
}

/// Decoded color code, channels not yet clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCode {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl ColorCode {
    pub fn decode(text: &str) -> Result<Self, ColorCodeError> {
        let bytes = text.as_bytes();
        if bytes.len() != COLOR_CODE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ColorCodeError::Malformed);
        }

        let channel = |index: usize| {
            bytes[index * CHANNEL_DIGITS..(index + 1) * CHANNEL_DIGITS]
                .iter()
                .fold(0u16, |value, digit| value * 10 + u16::from(digit - b'0'))
        };

        Ok(Self {
            red: channel(0),
            green: channel(1),
            blue: channel(2),
        })
    }

    pub fn encode(&self) -> String<COLOR_CODE_LEN> {
        let mut text = String::new();
        // Capped so the text always fits nine digits
        let _ = write!(
            text,
            "{:03}{:03}{:03}",
            self.red.min(999),
            self.green.min(999),
            self.blue.min(999)
        );
        text
    }

    /// Clamp every channel into 0-255
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_rgb(self) -> Rgb {
        let clamp = |value: u16| value.min(255) as u8;
        Rgb::new(clamp(self.red), clamp(self.green), clamp(self.blue))
    }
}

impl From<Rgb> for ColorCode {
    fn from(color: Rgb) -> Self {
        Self {
            red: color.r.into(),
            green: color.g.into(),
            blue: color.b.into(),
        }
    }
}

/// Encode an LED color as its nine digit code
pub fn encode_color(color: Rgb) -> String<COLOR_CODE_LEN> {
    ColorCode::from(color).encode()
}

/// Decode a color code straight to an LED color, malformed codes are off
pub fn decode_color_or_off(text: &str) -> Rgb {
    ColorCode::decode(text)
        .map(ColorCode::to_rgb)
        .unwrap_or_else(|_| {
            log::debug!("color: malformed code {:?}, using off", text);
            Rgb::default()
        })
}
