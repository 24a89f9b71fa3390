use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;

use crate::app::{RetryPolicy, retry};
use crate::config::PollConfig;
use crate::core::sync::Flag;
use crate::domain::ports::{
    BatteryControl, BootHandler, BootReport, LightPlayer, SensorError, TagReader,
    TagReaderError, TapHandler,
};

/// Hardware bring-up failure, fatal for the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupError {
    Sensor(SensorError),
    Reader(TagReaderError),
}

/// What only the polling loop touches
struct Foreground<R, S> {
    reader: R,
    session: S,
}

/// Top-level device lifecycle
///
/// The polling loop runs in the foreground; the battery monitor runs as a
/// separate task and is only reached here through [`BatteryControl`] for
/// bring-up and shutdown.
pub struct DeviceController<'a, R, S, L, G> {
    foreground: Mutex<CriticalSectionRawMutex, Foreground<R, S>>,
    lights: &'a L,
    battery: &'a G,
    shutdown: Flag,
    poll: PollConfig,
    retry: RetryPolicy,
}

impl<'a, R, S, L, G> DeviceController<'a, R, S, L, G>
where
    R: TagReader,
    S: TapHandler + BootHandler,
    L: LightPlayer,
    G: BatteryControl,
{
    pub const fn new(
        reader: R,
        session: S,
        lights: &'a L,
        battery: &'a G,
        poll: PollConfig,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            foreground: Mutex::new(Foreground { reader, session }),
            lights,
            battery,
            shutdown: Flag::new(),
            poll,
            retry,
        }
    }

    /// Bring up the battery sensor and the tag reader, with bounded retries
    pub async fn init(&self) -> Result<(), StartupError> {
        retry(self.retry, "battery sensor", async || self.battery.init().await)
            .await
            .map_err(StartupError::Sensor)?;

        let mut foreground = self.foreground.lock().await;
        retry(self.retry, "tag reader", async || foreground.reader.init().await)
            .await
            .map_err(StartupError::Reader)?;

        log::info!("device: hardware ready");
        Ok(())
    }

    /// Play the start-up sequence
    pub async fn boot(&self) -> BootReport {
        let report = self.foreground.lock().await.session.boot().await;
        log::info!(
            "device: booted, online={} hotspot={}",
            report.online,
            report.hotspot
        );
        report
    }

    /// Poll for tags until [`Self::shutdown`] is called
    pub async fn run(&self) {
        let mut foreground = self.foreground.lock().await;
        let Foreground { reader, session } = &mut *foreground;

        log::info!("device: waiting for tags");
        while !self.shutdown.is_raised() {
            match reader.poll_once(self.poll.poll_timeout).await {
                Ok(Some(card)) => {
                    let outcome = session.handle_tap(&card).await;
                    log::debug!("device: tap handled: {:?}", outcome);
                }
                Ok(None) => {}
                Err(e) => log::warn!("device: reader poll failed: {:?}", e),
            }
            Timer::after(self.poll.idle).await;
        }
        log::info!("device: polling stopped");
    }

    /// Stop the monitor and the polling loop, then clear the ring
    ///
    /// Only the first call does anything.
    pub async fn shutdown(&self) {
        if self.shutdown.raise() {
            return;
        }
        log::info!("device: shutting down");

        self.battery.request_stop();
        self.battery.wait_stopped().await;

        // Wait for the polling loop to notice the flag
        drop(self.foreground.lock().await);

        self.lights.blackout().await;
        log::info!("device: stopped");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_raised()
    }
}
