use embassy_time::{Duration, Timer};

use crate::color::{OFF, Rgb};
use crate::driver::LedDriver;
use crate::ring::Ring;

/// Number of mirrored pairs switched off before the seams
pub(crate) const fn split_steps(size: usize) -> usize {
    (size / 2).saturating_sub(1)
}

/// Close the lit ring pair by pair around the seam at `N / 2`
///
/// Pixels `N/2 - s` and `N/2 + s` go dark at step `s`. The seams
/// (`0` and `N/2`) are not part of any pair and go dark last.
pub(crate) async fn render_split<D: LedDriver, const N: usize>(
    ring: &mut Ring<D, N>,
    color: Rgb,
    duration: Duration,
) {
    let half = N / 2;
    let steps = split_steps(N);

    ring.fill(color);
    ring.present();

    if steps == 0 {
        Timer::after(duration).await;
        ring.blackout();
        return;
    }

    #[allow(clippy::cast_possible_truncation)]
    let delay = duration / steps as u32;
    for step in 1..=steps {
        Timer::after(delay).await;
        ring.set_pixel(half - step, OFF);
        ring.set_pixel(half + step, OFF);
        ring.present();
    }
    ring.blackout();
}
