//! ADS1115 16-bit ADC over I2C
//!
//! Single-shot conversions on AIN0 against ground with the ±4.096 V range.

use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;

use crate::domain::ports::{SensorError, VoltageSensor};

pub const ADS1115_ADDRESS: u8 = 0x48;

const REG_CONVERSION: u8 = 0x00;
const REG_CONFIG: u8 = 0x01;

/// OS=start, MUX=AIN0/GND, PGA=±4.096V, MODE=single-shot, DR=128SPS, comparator off
const CONFIG_SINGLE_SHOT_AIN0: u16 = 0xC383;
/// Set in the config register once a conversion is done
const CONFIG_OS_IDLE: u16 = 0x8000;

const FULL_SCALE_VOLTS: f32 = 4.096;
const FULL_SCALE_COUNTS: f32 = 32768.0;

/// One conversion at 128SPS takes under 8ms
const CONVERSION_POLL: Duration = Duration::from_millis(2);
const MAX_CONVERSION_POLLS: u8 = 20;

pub struct Ads1115<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Ads1115<I> {
    pub const fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: ADS1115_ADDRESS,
        }
    }

    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    async fn write_register(&mut self, register: u8, value: u16) -> Result<(), SensorError> {
        let [high, low] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register, high, low])
            .await
            .map_err(|_| SensorError::Bus)
    }

    async fn read_register(&mut self, register: u8) -> Result<u16, SensorError> {
        let mut value = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register], &mut value)
            .await
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_be_bytes(value))
    }

    /// Start a conversion and wait for the signed result
    pub async fn read_raw(&mut self) -> Result<i16, SensorError> {
        self.write_register(REG_CONFIG, CONFIG_SINGLE_SHOT_AIN0).await?;
        for _ in 0..MAX_CONVERSION_POLLS {
            Timer::after(CONVERSION_POLL).await;
            if self.read_register(REG_CONFIG).await? & CONFIG_OS_IDLE != 0 {
                let raw = self.read_register(REG_CONVERSION).await?;
                return Ok(i16::from_be_bytes(raw.to_be_bytes()));
            }
        }
        Err(SensorError::Timeout)
    }
}

impl<I: I2c> VoltageSensor for Ads1115<I> {
    async fn probe(&mut self) -> Result<(), SensorError> {
        self.read_register(REG_CONFIG)
            .await
            .map(|_| ())
            .map_err(|_| SensorError::Unavailable)
    }

    async fn read_voltage(&mut self) -> Result<f32, SensorError> {
        let raw = self.read_raw().await?;
        Ok(f32::from(raw) * FULL_SCALE_VOLTS / FULL_SCALE_COUNTS)
    }
}
