//! Time-driven animations
//!
//! Every renderer suspends the caller for the animation's length and leaves
//! the ring blacked out when it returns.

mod blink;
mod gauge;
mod rainbow;
mod solid;
mod spin;
mod split;

pub(crate) use blink::render_blink;
pub(crate) use gauge::render_gauge;
pub(crate) use rainbow::render_rainbow;
pub(crate) use solid::render_solid;
pub(crate) use spin::render_spin;
pub(crate) use split::render_split;

use embassy_time::Duration;

use crate::color::{OFF, Rgb};

pub const ANIMATION_NAME_SOLID: &str = "solid";
pub const ANIMATION_NAME_SPIN: &str = "spin";
pub const ANIMATION_NAME_SPLIT: &str = "split";
pub const ANIMATION_NAME_RAINBOW: &str = "rainbow";

/// Brightness levels of the rainbow fade-out, in order
pub const FADE_LEVELS: [u8; 5] = [255, 204, 153, 102, 51];

/// Known animation kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Whole ring in one color
    Solid,
    /// Single lit pixel chasing around the ring
    Spin,
    /// Lit ring closing in towards the seams
    Split,
    /// Rotating hue wheel with fade-out, ignores the color
    Rainbow,
}

impl AnimationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Spin => ANIMATION_NAME_SPIN,
            Self::Split => ANIMATION_NAME_SPLIT,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
        }
    }

    /// Parse a known animation name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        [Self::Solid, Self::Spin, Self::Split, Self::Rainbow]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Resolve a requested name, unknown names fall back to [`AnimationKind::Rainbow`]
    pub fn from_name(s: &str) -> Self {
        Self::parse_from_str(s).unwrap_or_else(|| {
            log::debug!("animation: unknown kind {:?}, using rainbow", s);
            Self::Rainbow
        })
    }
}

/// A single animation to play on the ring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRequest {
    pub kind: AnimationKind,
    pub color: Rgb,
    pub duration: Duration,
}

impl AnimationRequest {
    pub const fn new(kind: AnimationKind, color: Rgb, duration: Duration) -> Self {
        Self {
            kind,
            color,
            duration,
        }
    }

    pub const fn solid(color: Rgb, duration: Duration) -> Self {
        Self::new(AnimationKind::Solid, color, duration)
    }

    pub const fn spin(color: Rgb, duration: Duration) -> Self {
        Self::new(AnimationKind::Spin, color, duration)
    }

    pub const fn split(color: Rgb, duration: Duration) -> Self {
        Self::new(AnimationKind::Split, color, duration)
    }

    pub const fn rainbow(duration: Duration) -> Self {
        Self::new(AnimationKind::Rainbow, OFF, duration)
    }
}

/// Per-step delays of the frame-based animations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Delay between spinner steps
    pub spin_step: Duration,
    /// Delay between rainbow hue steps
    pub rainbow_step: Duration,
    /// Delay between rainbow fade-out levels
    pub fade_step: Duration,
}

impl AnimationTimings {
    pub const DEFAULT: Self = Self {
        spin_step: Duration::from_millis(10),
        rainbow_step: Duration::from_millis(10),
        fade_step: Duration::from_millis(40),
    };

    #[must_use]
    pub const fn with_spin_step(mut self, step: Duration) -> Self {
        self.spin_step = step;
        self
    }

    #[must_use]
    pub const fn with_rainbow_step(mut self, step: Duration) -> Self {
        self.rainbow_step = step;
        self
    }

    #[must_use]
    pub const fn with_fade_step(mut self, step: Duration) -> Self {
        self.fade_step = step;
        self
    }
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// On/off alert pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkPattern {
    pub cycles: u8,
    pub on: Duration,
    pub off: Duration,
}

impl BlinkPattern {
    pub const fn new(cycles: u8, on: Duration, off: Duration) -> Self {
        Self { cycles, on, off }
    }
}
