use embassy_time::Duration;
use tapring_light_composer::{AnimationRequest, AnimationTimings, BlinkPattern, Rgb};

/// Access to the shared LED ring
///
/// Every call waits for the ring to be free and returns with the ring dark.
pub trait LightPlayer {
    fn timings(&self) -> AnimationTimings;

    async fn play(&self, request: AnimationRequest);

    async fn play_with(&self, request: AnimationRequest, timings: &AnimationTimings);

    async fn gauge(&self, percent: u8, color: Rgb, hold: Duration);

    async fn blink(&self, color: Rgb, pattern: BlinkPattern);

    async fn blackout(&self);
}
