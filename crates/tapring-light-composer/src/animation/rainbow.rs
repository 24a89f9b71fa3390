use embassy_time::{Duration, Instant, Timer};

use super::{AnimationTimings, FADE_LEVELS};
use crate::color::{fade, wheel};
use crate::driver::LedDriver;
use crate::ring::Ring;

/// Hue of pixel `index` for a given rotation offset
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn hue_at(index: usize, size: usize, offset: u8) -> u8 {
    (((index * 256) / size + offset as usize) & 0xFF) as u8
}

fn draw<D: LedDriver, const N: usize>(ring: &mut Ring<D, N>, offset: u8, level: u8) {
    for index in 0..N {
        ring.set_pixel(index, fade(wheel(hue_at(index, N, offset)), level));
    }
}

/// Rotate the hue wheel for `duration`, then fade the last frame out
pub(crate) async fn render_rainbow<D: LedDriver, const N: usize>(
    ring: &mut Ring<D, N>,
    duration: Duration,
    timings: &AnimationTimings,
) {
    let started = Instant::now();
    let mut offset: u8 = 0;
    let mut last_shown = None;

    while N > 0 && started.elapsed() < duration {
        draw(ring, offset, 255);
        ring.present();
        last_shown = Some(offset);
        Timer::after(timings.rainbow_step).await;
        offset = offset.wrapping_add(1);
    }

    if let Some(offset) = last_shown {
        for level in FADE_LEVELS {
            draw(ring, offset, level);
            ring.present();
            Timer::after(timings.fade_step).await;
        }
    }
    ring.blackout();
}
