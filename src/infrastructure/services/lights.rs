use embassy_time::Duration;
use tapring_light_composer::{
    AnimationRequest, AnimationTimings, BlinkPattern, LedDriver, LedOwnership, Rgb,
};

use crate::domain::ports::LightPlayer;

impl<D: LedDriver, const N: usize> LightPlayer for LedOwnership<D, N> {
    fn timings(&self) -> AnimationTimings {
        *LedOwnership::timings(self)
    }

    async fn play(&self, request: AnimationRequest) {
        LedOwnership::play(self, request).await;
    }

    async fn play_with(&self, request: AnimationRequest, timings: &AnimationTimings) {
        LedOwnership::play_with(self, request, timings).await;
    }

    async fn gauge(&self, percent: u8, color: Rgb, hold: Duration) {
        LedOwnership::gauge(self, percent, color, hold).await;
    }

    async fn blink(&self, color: Rgb, pattern: BlinkPattern) {
        LedOwnership::blink(self, color, pattern).await;
    }

    async fn blackout(&self) {
        LedOwnership::blackout(self).await;
    }
}
