use embassy_time::{Duration, Instant, Timer};

use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::ring::Ring;

/// Walk a single lit pixel around the ring until `duration` has elapsed
///
/// Elapsed time is checked before every step, so the spinner may stop mid-lap.
pub(crate) async fn render_spin<D: LedDriver, const N: usize>(
    ring: &mut Ring<D, N>,
    color: Rgb,
    duration: Duration,
    step: Duration,
) {
    let started = Instant::now();
    let mut index = 0;
    while N > 0 && started.elapsed() < duration {
        ring.clear();
        ring.set_pixel(index, color);
        ring.present();
        Timer::after(step).await;
        index = (index + 1) % N;
    }
    ring.blackout();
}
