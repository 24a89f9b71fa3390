//! Shared access to the LED ring
//!
//! The ring sits behind one async mutex. Every render holds the lock from
//! its first frame until the ring is dark again, so two callers never
//! interleave frames. A caller that finds the ring busy waits for the
//! running animation to finish.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Duration;

use crate::animation::{
    AnimationKind, AnimationRequest, AnimationTimings, BlinkPattern, render_blink, render_gauge,
    render_rainbow, render_solid, render_spin, render_split,
};
use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::guard::ClearOnDrop;
use crate::ring::Ring;

pub struct LedOwnership<D: LedDriver, const N: usize> {
    ring: Mutex<CriticalSectionRawMutex, Ring<D, N>>,
    timings: AnimationTimings,
}

impl<D: LedDriver, const N: usize> LedOwnership<D, N> {
    pub const fn new(driver: D, timings: AnimationTimings) -> Self {
        Self {
            ring: Mutex::new(Ring::new(driver)),
            timings,
        }
    }

    pub const fn timings(&self) -> &AnimationTimings {
        &self.timings
    }

    /// Play an animation with the configured step timings
    pub async fn play(&self, request: AnimationRequest) {
        self.play_with(request, &self.timings).await;
    }

    /// Play an animation with explicit step timings
    pub async fn play_with(&self, request: AnimationRequest, timings: &AnimationTimings) {
        log::debug!(
            "lights: {} for {}ms",
            request.kind.as_str(),
            request.duration.as_millis()
        );
        let mut guard = self.ring.lock().await;
        let mut ring = ClearOnDrop::new(&mut *guard);
        match request.kind {
            AnimationKind::Solid => render_solid(&mut *ring, request.color, request.duration).await,
            AnimationKind::Spin => {
                render_spin(&mut *ring, request.color, request.duration, timings.spin_step).await;
            }
            AnimationKind::Split => render_split(&mut *ring, request.color, request.duration).await,
            AnimationKind::Rainbow => render_rainbow(&mut *ring, request.duration, timings).await,
        }
    }

    /// Show `percent` of the ring lit in `color` for `hold`
    pub async fn gauge(&self, percent: u8, color: Rgb, hold: Duration) {
        let mut guard = self.ring.lock().await;
        let mut ring = ClearOnDrop::new(&mut *guard);
        render_gauge(&mut *ring, percent, color, hold).await;
    }

    pub async fn blink(&self, color: Rgb, pattern: BlinkPattern) {
        let mut guard = self.ring.lock().await;
        let mut ring = ClearOnDrop::new(&mut *guard);
        render_blink(&mut *ring, color, pattern).await;
    }

    /// Turn every pixel off, waiting for a running animation first
    pub async fn blackout(&self) {
        self.ring.lock().await.blackout();
    }

    /// Run `f` against the ring while holding the lock
    pub async fn with_ring<R>(&self, f: impl FnOnce(&mut Ring<D, N>) -> R) -> R {
        let mut guard = self.ring.lock().await;
        f(&mut guard)
    }
}
