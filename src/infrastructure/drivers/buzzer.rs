use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;

use crate::domain::ports::Beeper;

/// Active buzzer on a digital output
pub struct Buzzer<P> {
    pin: P,
    duration: Duration,
}

impl<P: OutputPin> Buzzer<P> {
    pub const fn new(pin: P, duration: Duration) -> Self {
        Self { pin, duration }
    }
}

impl<P: OutputPin> Beeper for Buzzer<P> {
    async fn beep(&mut self) {
        if let Err(e) = self.pin.set_high() {
            log::warn!("buzzer: set high failed: {:?}", e);
            return;
        }
        Timer::after(self.duration).await;
        if let Err(e) = self.pin.set_low() {
            log::warn!("buzzer: set low failed: {:?}", e);
        }
    }
}
