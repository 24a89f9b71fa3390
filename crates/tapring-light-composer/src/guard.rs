use core::ops::{Deref, DerefMut};

use crate::driver::LedDriver;
use crate::ring::Ring;

/// Borrow of the ring that blacks it out when dropped
///
/// Covers early returns and cancelled render futures alike.
pub(crate) struct ClearOnDrop<'a, D: LedDriver, const N: usize> {
    ring: &'a mut Ring<D, N>,
}

impl<'a, D: LedDriver, const N: usize> ClearOnDrop<'a, D, N> {
    pub(crate) fn new(ring: &'a mut Ring<D, N>) -> Self {
        Self { ring }
    }
}

impl<D: LedDriver, const N: usize> Deref for ClearOnDrop<'_, D, N> {
    type Target = Ring<D, N>;

    fn deref(&self) -> &Self::Target {
        self.ring
    }
}

impl<D: LedDriver, const N: usize> DerefMut for ClearOnDrop<'_, D, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ring
    }
}

impl<D: LedDriver, const N: usize> Drop for ClearOnDrop<'_, D, N> {
    fn drop(&mut self) {
        self.ring.blackout();
    }
}
