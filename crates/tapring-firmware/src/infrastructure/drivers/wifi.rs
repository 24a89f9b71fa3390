//! Radio mode switching
//!
//! The `WifiController` lives in the connection task. Other tasks ask it to
//! switch between station only and station plus access point through a
//! one-slot command channel and wait for the answer on a signal.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, with_timeout};
use esp_radio::wifi::{AccessPointConfig, AuthMethod, ClientConfig, ModeConfig, WifiController};

use crate::infrastructure::config;

/// Upper bound for a mode switch, restarting the radio included
const MODE_SWITCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WifiCommand {
    StartHotspot,
    StopHotspot,
}

static WIFI_COMMANDS: Channel<CriticalSectionRawMutex, WifiCommand, 1> = Channel::new();
static WIFI_REPLIES: Signal<CriticalSectionRawMutex, bool> = Signal::new();
/// One request in flight at a time
static WIFI_REQUEST: Mutex<CriticalSectionRawMutex, ()> = Mutex::new(());

pub(crate) fn wifi_commands() -> &'static Channel<CriticalSectionRawMutex, WifiCommand, 1> {
    &WIFI_COMMANDS
}

pub(crate) fn wifi_replies() -> &'static Signal<CriticalSectionRawMutex, bool> {
    &WIFI_REPLIES
}

/// Ask the connection task for a mode switch and wait for the outcome
pub(crate) async fn request_wifi_mode(command: WifiCommand) -> bool {
    let _request = WIFI_REQUEST.lock().await;
    WIFI_REPLIES.reset();
    WIFI_COMMANDS.send(command).await;
    match with_timeout(MODE_SWITCH_TIMEOUT, WIFI_REPLIES.wait()).await {
        Ok(done) => done,
        Err(_) => {
            log::warn!("wifi: {:?} timed out", command);
            false
        }
    }
}

pub(crate) fn station_config() -> ClientConfig {
    let client = ClientConfig::default().with_ssid(config::WIFI_SSID.into());
    if config::WIFI_PASSWORD.is_empty() {
        client.with_auth_method(AuthMethod::None)
    } else {
        client.with_password(config::WIFI_PASSWORD.into())
    }
}

pub(crate) fn mode_config(hotspot: bool) -> ModeConfig {
    if hotspot {
        let access_point = AccessPointConfig::default()
            .with_ssid(config::HOTSPOT_SSID.into())
            .with_password(config::HOTSPOT_PASSWORD.into())
            .with_auth_method(AuthMethod::Wpa2Personal);
        ModeConfig::ApSta(station_config(), access_point)
    } else {
        ModeConfig::Client(station_config())
    }
}

/// Restart the radio in the requested mode
pub(crate) async fn switch_mode(controller: &mut WifiController<'static>, hotspot: bool) -> bool {
    if matches!(controller.is_started(), Ok(true)) {
        if let Err(e) = controller.stop_async().await {
            log::warn!("wifi: stop failed: {:?}", e);
        }
    }
    if let Err(e) = controller.set_config(&mode_config(hotspot)) {
        log::error!("wifi: config rejected: {:?}", e);
        return false;
    }
    match controller.start_async().await {
        Ok(()) => {
            log::info!("wifi: hotspot {}", if hotspot { "up" } else { "down" });
            true
        }
        Err(e) => {
            log::error!("wifi: start failed: {:?}", e);
            false
        }
    }
}
