use embassy_futures::select::{Either, select};
use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{WifiController, WifiDevice, WifiEvent, WifiStaState};

use crate::infrastructure::drivers::{
    WifiCommand, mode_config, switch_mode, wifi_commands, wifi_replies,
};

/// Background task keeping the station connected
///
/// Reconnects after a drop and serves hotspot mode switches in between.
#[embassy_executor::task]
pub(crate) async fn wifi_connection_task(mut controller: WifiController<'static>) {
    let mut hotspot = false;
    loop {
        if !matches!(controller.is_started(), Ok(true)) {
            if let Err(e) = controller.set_config(&mode_config(hotspot)) {
                log::error!("wifi: config rejected: {:?}", e);
            }
            if let Err(e) = controller.start_async().await {
                log::error!("wifi: start failed: {:?}", e);
                Timer::after(Duration::from_millis(5000)).await;
                continue;
            }
        }

        match select(keep_connected(&mut controller), wifi_commands().receive()).await {
            Either::First(()) => {}
            Either::Second(command) => {
                let enable = command == WifiCommand::StartHotspot;
                let done = switch_mode(&mut controller, enable).await;
                if done {
                    hotspot = enable;
                }
                wifi_replies().signal(done);
            }
        }
    }
}

/// One connect attempt, or wait for the current link to drop
async fn keep_connected(controller: &mut WifiController<'static>) {
    if esp_radio::wifi::sta_state() == WifiStaState::Connected {
        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        log::warn!("wifi: disconnected");
        Timer::after(Duration::from_millis(2000)).await;
        return;
    }

    log::info!("wifi: connecting");
    if let Err(e) = controller.connect_async().await {
        log::warn!("wifi: connect failed: {:?}", e);
        Timer::after(Duration::from_millis(5000)).await;
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub(crate) async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
