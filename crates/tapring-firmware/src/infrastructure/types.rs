use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use esp_hal::Async;
use esp_hal::gpio::Output;
use esp_hal::i2c::master::I2c;
use tapring::app::{AdminMenu, BatteryMonitor, TapSession};
use tapring::controllers::DeviceController;
use tapring::infrastructure::drivers::{Ads1115, Buzzer, Pn532};
use tapring::infrastructure::services::{HttpAuthServer, TcpProbe};
use tapring_light_composer::LedOwnership;

use crate::infrastructure::config::LED_COUNT;
use crate::infrastructure::drivers::{EspLedDriver, EspTransport};
use crate::infrastructure::services::EspHotspot;

pub(crate) type I2cBus = Mutex<CriticalSectionRawMutex, I2c<'static, Async>>;
pub(crate) type SharedI2c = I2cDevice<'static, CriticalSectionRawMutex, I2c<'static, Async>>;

pub(crate) type Lights = LedOwnership<EspLedDriver, LED_COUNT>;
pub(crate) type Sensor = Ads1115<SharedI2c>;
pub(crate) type Reader = Pn532<SharedI2c>;
pub(crate) type Server = HttpAuthServer<'static, EspTransport>;
pub(crate) type Probe = TcpProbe<'static, EspTransport>;
pub(crate) type Monitor = BatteryMonitor<'static, Sensor, Lights, Server>;
pub(crate) type Menu = AdminMenu<'static, Lights, Monitor, Probe, EspHotspot>;
pub(crate) type Session = TapSession<'static, Lights, Server, Menu, Buzzer<Output<'static>>>;
pub(crate) type Controller = DeviceController<'static, Reader, Session, Lights, Monitor>;
