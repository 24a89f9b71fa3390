use tapring::domain::ports::Hotspot;

use crate::infrastructure::drivers::{WifiCommand, request_wifi_mode};

/// Hotspot control through the Wi-Fi connection task
#[derive(Default)]
pub(crate) struct EspHotspot;

impl Hotspot for EspHotspot {
    async fn start_hotspot(&self) -> bool {
        request_wifi_mode(WifiCommand::StartHotspot).await
    }

    async fn stop_hotspot(&self) -> bool {
        request_wifi_mode(WifiCommand::StopHotspot).await
    }
}
