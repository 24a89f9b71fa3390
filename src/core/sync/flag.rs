use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Boolean shared between tasks
///
/// Test-and-set goes through a critical section, so it also works on
/// targets without atomic read-modify-write instructions.
pub struct Flag {
    inner: Mutex<CriticalSectionRawMutex, Cell<bool>>,
}

impl Flag {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(false)),
        }
    }

    /// Raise the flag, returning whether it was already raised
    pub fn raise(&self) -> bool {
        self.inner.lock(|flag| flag.replace(true))
    }

    pub fn lower(&self) {
        self.inner.lock(|flag| flag.set(false));
    }

    pub fn is_raised(&self) -> bool {
        self.inner.lock(Cell::get)
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::new()
    }
}
