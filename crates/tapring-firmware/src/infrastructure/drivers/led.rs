use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;
use tapring_light_composer::{LedDriver, Rgb};

use crate::infrastructure::config::LED_COUNT;

/// `smart_led_buffer!` takes the LED count and sizes the buffer itself
const RMT_BUFFER_SIZE: usize = buffer_size(LED_COUNT);

/// WS2812 ring on the RMT peripheral
pub(crate) struct EspLedDriver {
    adapter: SmartLedsAdapter<'static, RMT_BUFFER_SIZE>,
}

impl EspLedDriver {
    pub(crate) fn new<O>(rmt: RMT<'static>, pin: O) -> Self
    where
        O: PeripheralOutput<'static>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).unwrap();
        let buffer = mk_static!(
            [PulseCode; RMT_BUFFER_SIZE],
            smart_led_buffer!(LED_COUNT)
        );
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, buffer);

        Self { adapter }
    }
}

impl LedDriver for EspLedDriver {
    fn write<const N: usize>(&mut self, colors: &[Rgb; N]) {
        // WS2812 timing does not survive an interrupt mid-frame
        let result = critical_section::with(|_| self.adapter.write(colors.iter().copied()));
        if let Err(e) = result {
            log::warn!("led: write failed: {:?}", e);
        }
    }
}
