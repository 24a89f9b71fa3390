use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};
use tapring_light_composer::Rgb;
use tapring_light_composer::color::{GREEN, RED, YELLOW, dim};

use crate::app::retry::retry;
use crate::config::BatteryConfig;
use crate::core::sync::Flag;
use crate::domain::entity::{BatteryRange, BatteryReading};
use crate::domain::ports::{
    BatteryControl, BatteryGauge, BatteryReporter, LightPlayer, NetworkError, SensorError,
    VoltageSensor,
};

/// Brightness of the low-battery alert
const ALERT_BRIGHTNESS: u8 = 64;

/// Level bar color: green above 60%, yellow above 30%, red otherwise
pub fn level_color(percentage: u8) -> Rgb {
    match percentage {
        61.. => GREEN,
        31..=60 => YELLOW,
        _ => RED,
    }
}

/// Background battery sampling, reporting and low-battery alert
///
/// The sensor sits behind its own mutex so the admin menu can take an
/// on-demand reading while the monitor sleeps.
pub struct BatteryMonitor<'a, S, L, R> {
    sensor: Mutex<CriticalSectionRawMutex, S>,
    lights: &'a L,
    reporter: &'a R,
    range: BatteryRange,
    config: BatteryConfig,
    stop: Flag,
    running: Flag,
    stopped: Signal<CriticalSectionRawMutex, ()>,
}

impl<'a, S, L, R> BatteryMonitor<'a, S, L, R>
where
    S: VoltageSensor,
    L: LightPlayer,
    R: BatteryReporter,
{
    pub const fn new(sensor: S, lights: &'a L, reporter: &'a R, config: BatteryConfig) -> Self {
        Self {
            sensor: Mutex::new(sensor),
            lights,
            reporter,
            range: BatteryRange::new(config.min_volts, config.max_volts),
            config,
            stop: Flag::new(),
            running: Flag::new(),
            stopped: Signal::new(),
        }
    }

    /// Monitor loop: one immediate cycle, then one per interval until stopped
    pub async fn run(&self) {
        if self.running.raise() {
            log::warn!("battery: monitor already running");
            return;
        }
        log::info!("battery: monitor started");

        if !self.stop.is_raised() {
            self.run_cycle(true).await;
        }
        while self.sleep_interval().await {
            self.run_cycle(false).await;
        }

        log::info!("battery: monitor stopped");
        self.stopped.signal(());
        self.running.lower();
    }

    /// Sample, report and alert once
    ///
    /// `show_level` marks the start-up cycle: it adds the level bar and
    /// retries the report with [`BatteryConfig::first_report_retry`].
    pub async fn run_cycle(&self, show_level: bool) -> Option<BatteryReading> {
        let Some(reading) = self.read_battery().await else {
            log::warn!("battery: no reading this cycle");
            return None;
        };
        log::info!(
            "battery: {:.2}V, {}%",
            reading.volts,
            reading.percentage
        );

        let reported = if show_level {
            self.report_first(reading.percentage).await
        } else {
            self.reporter.report_battery(reading.percentage).await
        };
        if let Err(e) = reported {
            log::warn!("battery: report failed: {:?}", e);
        }

        if show_level {
            self.lights
                .gauge(
                    reading.percentage,
                    level_color(reading.percentage),
                    self.config.gauge_hold,
                )
                .await;
        }

        if reading.volts < self.config.warning_volts {
            log::warn!("battery: low voltage {:.2}V", reading.volts);
            self.lights
                .blink(
                    dim(self.config.alert_color, ALERT_BRIGHTNESS),
                    self.config.alert,
                )
                .await;
        }

        Some(reading)
    }

    /// Start-up report, abandoned once a stop is requested
    async fn report_first(&self, percentage: u8) -> Result<(), NetworkError> {
        retry(self.config.first_report_retry, "battery report", async || {
            if self.stop.is_raised() {
                return Ok(());
            }
            self.reporter.report_battery(percentage).await
        })
        .await
    }

    /// Sleep one interval in slices, `false` once a stop was requested
    async fn sleep_interval(&self) -> bool {
        let deadline = Instant::now() + self.config.interval;
        loop {
            if self.stop.is_raised() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            Timer::after((deadline - now).min(self.config.stop_poll)).await;
        }
    }
}

impl<S, L, R> BatteryGauge for BatteryMonitor<'_, S, L, R>
where
    S: VoltageSensor,
    L: LightPlayer,
    R: BatteryReporter,
{
    async fn read_battery(&self) -> Option<BatteryReading> {
        let mut sensor = self.sensor.lock().await;
        let samples = self.config.samples.max(1);
        let mut total = 0.0f32;
        for sample in 0..samples {
            if sample > 0 {
                Timer::after(self.config.sample_delay).await;
            }
            match sensor.read_voltage().await {
                Ok(volts) => total += volts,
                Err(e) => {
                    log::warn!("battery: sensor read failed: {:?}", e);
                    return None;
                }
            }
        }
        Some(self.range.reading(total / f32::from(samples)))
    }
}

impl<S, L, R> BatteryControl for BatteryMonitor<'_, S, L, R>
where
    S: VoltageSensor,
    L: LightPlayer,
    R: BatteryReporter,
{
    async fn init(&self) -> Result<(), SensorError> {
        self.sensor.lock().await.probe().await
    }

    fn request_stop(&self) {
        self.stop.raise();
    }

    async fn wait_stopped(&self) {
        if self.running.is_raised() {
            self.stopped.wait().await;
        }
    }
}
