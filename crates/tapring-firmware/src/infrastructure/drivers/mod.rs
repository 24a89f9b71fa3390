mod led;
mod network;
mod random;
mod transport;
mod wifi;

pub(crate) use led::EspLedDriver;
pub(crate) use network::{init_network_stack, resolve_host, wait_for_connection};
pub(crate) use transport::EspTransport;
pub(crate) use wifi::{WifiCommand, mode_config, request_wifi_mode, switch_mode, wifi_commands, wifi_replies};
