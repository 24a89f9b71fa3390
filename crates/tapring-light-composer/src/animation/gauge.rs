use embassy_time::{Duration, Timer};

use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::math8::percent_of;
use crate::ring::Ring;

/// Light the leading share of the ring as a level bar
pub(crate) async fn render_gauge<D: LedDriver, const N: usize>(
    ring: &mut Ring<D, N>,
    percent: u8,
    color: Rgb,
    hold: Duration,
) {
    ring.clear();
    for index in 0..percent_of(percent, N) {
        ring.set_pixel(index, color);
    }
    ring.present();
    Timer::after(hold).await;
    ring.blackout();
}
