use embassy_time::{Duration, Timer};

use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::ring::Ring;

pub(crate) async fn render_solid<D: LedDriver, const N: usize>(
    ring: &mut Ring<D, N>,
    color: Rgb,
    duration: Duration,
) {
    ring.fill(color);
    ring.present();
    Timer::after(duration).await;
    ring.blackout();
}
