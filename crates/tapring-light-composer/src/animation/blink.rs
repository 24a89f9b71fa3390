use embassy_time::Timer;

use super::BlinkPattern;
use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::ring::Ring;

pub(crate) async fn render_blink<D: LedDriver, const N: usize>(
    ring: &mut Ring<D, N>,
    color: Rgb,
    pattern: BlinkPattern,
) {
    for _ in 0..pattern.cycles {
        ring.fill(color);
        ring.present();
        Timer::after(pattern.on).await;
        ring.clear();
        ring.present();
        Timer::after(pattern.off).await;
    }
    ring.blackout();
}
