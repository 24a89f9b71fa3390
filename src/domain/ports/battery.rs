use crate::domain::entity::BatteryReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No device answered at the expected address
    Unavailable,
    /// Bus transfer failed
    Bus,
    /// Conversion never finished
    Timeout,
}

/// One analog channel measured in volts
pub trait VoltageSensor {
    /// Check the sensor answers
    async fn probe(&mut self) -> Result<(), SensorError>;

    async fn read_voltage(&mut self) -> Result<f32, SensorError>;
}

/// On-demand battery reading
pub trait BatteryGauge {
    /// `None` when the sensor fails mid-read
    async fn read_battery(&self) -> Option<BatteryReading>;
}

/// Lifecycle of the background battery monitor
pub trait BatteryControl {
    /// Probe the sensor once
    async fn init(&self) -> Result<(), SensorError>;

    /// Ask the monitor to stop at its next check
    fn request_stop(&self);

    /// Wait until the monitor loop has exited, returns at once if it never ran
    async fn wait_stopped(&self);
}
