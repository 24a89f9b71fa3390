use tapring::config::{DeviceConfig, ServerConfig};

pub(crate) const WIFI_SSID: &str = env!("WIFI_SSID");
pub(crate) const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");
pub(crate) const HOSTNAME: &str = "tapring";

/// WPA2 access point raised by the admin menu or an offline boot
pub(crate) const HOTSPOT_SSID: &str = "TapAP";
pub(crate) const HOTSPOT_PASSWORD: &str = env!("HOTSPOT_PASSWORD");
const _: () = assert!(
    HOTSPOT_PASSWORD.len() >= 8 && HOTSPOT_PASSWORD.len() <= 63,
    "HOTSPOT_PASSWORD must be 8 to 63 characters for WPA2"
);

pub(crate) const TAP_SERVER_HOST: &str = env!("TAP_SERVER_HOST");
pub(crate) const TAP_SERVER_PORT: u16 = 8000;

pub(crate) const DEVICE_NAME: &str = match option_env!("TAP_DEVICE_NAME") {
    Some(name) => name,
    None => "Entrance",
};

pub(crate) const LED_COUNT: usize = 24;

pub(crate) const DEVICE: DeviceConfig = DeviceConfig::DEFAULT
    .with_device_name(DEVICE_NAME)
    .with_server(
        ServerConfig::DEFAULT
            .with_host(TAP_SERVER_HOST)
            .with_port(TAP_SERVER_PORT),
    );

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO7
    };
}

#[macro_export]
macro_rules! buzzer_gpio {
    ($p:expr) => {
        $p.GPIO10
    };
}

#[macro_export]
macro_rules! i2c_sda_gpio {
    ($p:expr) => {
        $p.GPIO4
    };
}

#[macro_export]
macro_rules! i2c_scl_gpio {
    ($p:expr) => {
        $p.GPIO5
    };
}

/// Boot button doubles as the shutdown button
#[macro_export]
macro_rules! shutdown_button_gpio {
    ($p:expr) => {
        $p.GPIO9
    };
}
