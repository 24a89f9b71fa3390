use core::fmt::Write as _;

use heapless::String;

/// Longest NFCID the reader reports (triple size UID)
pub const MAX_TAG_ID_BYTES: usize = 10;

/// Tag identifier as lowercase hex
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagId(String<{ MAX_TAG_ID_BYTES * 2 }>);

impl TagId {
    /// Render raw UID bytes, anything past [`MAX_TAG_ID_BYTES`] is dropped
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hex = String::new();
        for byte in bytes.iter().take(MAX_TAG_ID_BYTES) {
            let _ = write!(hex, "{byte:02x}");
        }
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Linear single-cell voltage window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryRange {
    pub min_volts: f32,
    pub max_volts: f32,
}

impl BatteryRange {
    pub const fn new(min_volts: f32, max_volts: f32) -> Self {
        Self {
            min_volts,
            max_volts,
        }
    }

    /// Percentage of the window covered by `volts`, rounded and clamped to 0-100
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self, volts: f32) -> u8 {
        let span = self.max_volts - self.min_volts;
        if span <= 0.0 {
            return if volts >= self.max_volts { 100 } else { 0 };
        }
        let scaled = (volts - self.min_volts) / span * 100.0;
        if scaled >= 100.0 {
            100
        } else if scaled > 0.0 {
            // Positive, so truncation after +0.5 rounds half up
            (scaled + 0.5) as u8
        } else {
            0
        }
    }

    pub fn reading(&self, volts: f32) -> BatteryReading {
        BatteryReading {
            volts,
            percentage: self.percentage(volts),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryReading {
    pub volts: f32,
    pub percentage: u8,
}

/// Consecutive admin taps seen so far
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminMenuState {
    tap_count: u8,
}

/// What an admin tap asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    /// First tap: show the battery level
    BatteryCheck,
    /// Second tap: probe internet reachability
    ConnectivityCheck,
    /// Third tap: toggle the hotspot
    HotspotToggle,
    /// Any count past the menu
    Overflow,
}

impl AdminMenuState {
    pub const fn new() -> Self {
        Self { tap_count: 0 }
    }

    /// Resume from a known count
    pub const fn from_tap_count(tap_count: u8) -> Self {
        Self { tap_count }
    }

    pub const fn tap_count(&self) -> u8 {
        self.tap_count
    }

    /// Count one admin tap and pick the action for it
    pub fn advance(&mut self) -> AdminAction {
        self.tap_count = self.tap_count.saturating_add(1);
        match self.tap_count {
            1 => AdminAction::BatteryCheck,
            2 => AdminAction::ConnectivityCheck,
            3 => {
                self.reset();
                AdminAction::HotspotToggle
            }
            _ => {
                self.reset();
                AdminAction::Overflow
            }
        }
    }

    pub fn reset(&mut self) {
        self.tap_count = 0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotspotState {
    pub enabled: bool,
}
