use embassy_time::Duration;
use heapless::String;
use serde::{Deserialize, Serialize};
use tapring_light_composer::{AnimationKind, AnimationRequest, Rgb};

use crate::domain::color::decode_color_or_off;

/// `cardType` value that routes a tap to the admin menu
pub const ADMIN_CARD_TYPE: &str = "ADMIN";

pub const DEFAULT_DECISION_DURATION_MS: u32 = 1000;

const MAX_CARD_TYPE_LEN: usize = 16;

/// Body of `POST /tap`
#[derive(Clone, Debug, Serialize)]
pub struct TapRequest<'a> {
    pub device: &'a str,
    pub card: &'a str,
}

/// Body of a successful `POST /tap`, every field optional
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TapResponse<'a> {
    #[serde(default, borrow)]
    pub color: Option<&'a str>,
    /// Milliseconds, integral or fractional
    #[serde(default)]
    pub duration: Option<f32>,
    #[serde(default, borrow)]
    pub card_type: Option<&'a str>,
    #[serde(default, borrow)]
    pub animation: Option<&'a str>,
}

/// Server verdict for one tap, with defaults applied
///
/// - missing or malformed `color` is off
/// - missing `duration` is one second, fractions round to the nearest
///   millisecond and negative values are zero
/// - missing `animation` is solid, an unknown name is rainbow
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerDecision {
    pub color: Rgb,
    pub duration: Duration,
    pub card_type: String<MAX_CARD_TYPE_LEN>,
    pub animation: AnimationKind,
}

impl ServerDecision {
    pub fn is_admin(&self) -> bool {
        self.card_type.eq_ignore_ascii_case(ADMIN_CARD_TYPE)
    }

    pub const fn animation_request(&self) -> AnimationRequest {
        AnimationRequest::new(self.animation, self.color, self.duration)
    }
}

impl From<TapResponse<'_>> for ServerDecision {
    fn from(response: TapResponse<'_>) -> Self {
        let mut card_type = String::new();
        for c in response.card_type.unwrap_or_default().chars() {
            if card_type.push(c).is_err() {
                break;
            }
        }

        Self {
            color: response.color.map(decode_color_or_off).unwrap_or_default(),
            duration: Duration::from_millis(
                response
                    .duration
                    .map_or(DEFAULT_DECISION_DURATION_MS.into(), round_millis),
            ),
            card_type,
            animation: response
                .animation
                .map_or(AnimationKind::Solid, AnimationKind::from_name),
        }
    }
}

/// Nearest whole millisecond, negative and NaN become zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_millis(millis: f32) -> u64 {
    if millis > 0.0 {
        (millis + 0.5) as u64
    } else {
        0
    }
}
