#![no_std]
#![no_main]

// static_cell::make_static! needs nightly, this one does not
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}

mod infrastructure;

use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer, with_timeout};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use tapring::app::{AdminMenu, BatteryMonitor, TapSession};
use tapring::controllers::DeviceController;
use tapring::infrastructure::drivers::{Ads1115, Buzzer, Pn532};
use tapring::infrastructure::services::{HttpAuthServer, TcpProbe};
use tapring_light_composer::LedOwnership;

use crate::infrastructure::config::DEVICE;
use crate::infrastructure::drivers::{
    EspLedDriver, EspTransport, init_network_stack, wait_for_connection,
};
use crate::infrastructure::services::EspHotspot;
use crate::infrastructure::tasks::{
    battery_task, network_runner_task, shutdown_button_task, wifi_connection_task,
};
use crate::infrastructure::types::{
    Controller, I2cBus, Lights, Menu, Monitor, Probe, Server, Session,
};

esp_bootloader_esp_idf::esp_app_desc!();

/// How long boot waits for a DHCP lease before declaring the device offline
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: 72 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let software_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, software_interrupt.software_interrupt0);

    // LED ring, buzzer and the shared I2C bus
    let lights = &*mk_static!(
        Lights,
        LedOwnership::new(
            EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals)),
            DEVICE.animations,
        )
    );
    let buzzer = Buzzer::new(
        Output::new(buzzer_gpio!(peripherals), Level::Low, OutputConfig::default()),
        DEVICE.tap.beep,
    );
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(100)),
    )
    .unwrap()
    .with_sda(i2c_sda_gpio!(peripherals))
    .with_scl(i2c_scl_gpio!(peripherals))
    .into_async();
    let bus = &*mk_static!(I2cBus, Mutex::new(i2c));

    // Initialize network stack and spawn network tasks
    let (stack, runner, wifi_controller) = init_network_stack(peripherals.WIFI);
    spawner.spawn(wifi_connection_task(wifi_controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    let transport = &*mk_static!(EspTransport, EspTransport::new(stack));
    let server = &*mk_static!(
        Server,
        HttpAuthServer::new(transport, &DEVICE.server, DEVICE.device_name)
    );
    let probe = &*mk_static!(Probe, TcpProbe::new(transport, &DEVICE.admin));
    let hotspot = &*mk_static!(EspHotspot, EspHotspot);

    // Usecases and the controller
    let monitor = &*mk_static!(
        Monitor,
        BatteryMonitor::new(
            Ads1115::new(I2cDevice::new(bus)),
            lights,
            server,
            DEVICE.battery,
        )
    );
    let menu: Menu = AdminMenu::new(lights, monitor, probe, hotspot, DEVICE.admin);
    let session: Session = TapSession::new(
        lights,
        server,
        menu,
        Some(buzzer),
        DEVICE.tap,
        DEVICE.boot,
    );
    let controller = &*mk_static!(
        Controller,
        DeviceController::new(
            Pn532::new(I2cDevice::new(bus)),
            session,
            lights,
            monitor,
            DEVICE.poll,
            DEVICE.startup_retry,
        )
    );

    controller.init().await.unwrap();

    let button = Input::new(
        shutdown_button_gpio!(peripherals),
        InputConfig::default().with_pull(Pull::Up),
    );
    spawner.spawn(shutdown_button_task(button, controller)).ok();

    if with_timeout(CONNECT_TIMEOUT, wait_for_connection(stack))
        .await
        .is_err()
    {
        log::warn!("network: no lease after {}s", CONNECT_TIMEOUT.as_secs());
    }

    // The first battery report needs the lease
    spawner.spawn(battery_task(monitor)).ok();

    controller.boot().await;
    controller.run().await;

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
