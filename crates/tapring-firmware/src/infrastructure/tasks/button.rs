use esp_hal::gpio::Input;

use crate::infrastructure::types::Controller;

/// Shut the device down on the first button press
#[embassy_executor::task]
pub(crate) async fn shutdown_button_task(mut button: Input<'static>, controller: &'static Controller) {
    button.wait_for_falling_edge().await;
    log::info!("button: shutdown requested");
    controller.shutdown().await;
}
