//! Device configuration
//!
//! Everything is compile-time data with `const` defaults. The firmware
//! overrides the deployment specific parts (server host, device name) with
//! the `with_*` builders.

use core::net::Ipv4Addr;

use embassy_time::Duration;
use tapring_light_composer::color::{AMBER, BLUE, GREEN, RED, WHITE};
use tapring_light_composer::{AnimationTimings, BlinkPattern, Rgb};

use crate::app::RetryPolicy;

/// Authorization server endpoint
#[derive(Clone, Copy, Debug)]
pub struct ServerConfig {
    pub host: &'static str,
    pub port: u16,
    /// Upper bound for one request, connect to last byte
    pub timeout: Duration,
}

impl ServerConfig {
    pub const DEFAULT: Self = Self {
        host: "127.0.0.1",
        port: 8000,
        timeout: Duration::from_secs(5),
    };

    #[must_use]
    pub const fn with_host(mut self, host: &'static str) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Battery sampling, reporting and alerting
#[derive(Clone, Copy, Debug)]
pub struct BatteryConfig {
    /// Voltage reported as 0%
    pub min_volts: f32,
    /// Voltage reported as 100%
    pub max_volts: f32,
    /// Below this the monitor plays the low-battery alert
    pub warning_volts: f32,
    /// Readings averaged per sample
    pub samples: u8,
    pub sample_delay: Duration,
    /// Time between two monitor cycles
    pub interval: Duration,
    /// Longest time the monitor sleeps before looking at the stop flag
    pub stop_poll: Duration,
    pub alert_color: Rgb,
    pub alert: BlinkPattern,
    /// How long the level bar stays on
    pub gauge_hold: Duration,
    /// Attempts for the start-up report, sent while the network may still be coming up
    pub first_report_retry: RetryPolicy,
}

impl BatteryConfig {
    pub const DEFAULT: Self = Self {
        min_volts: 3.0,
        max_volts: 4.2,
        warning_volts: 3.4,
        samples: 5,
        sample_delay: Duration::from_millis(100),
        interval: Duration::from_secs(60),
        stop_poll: Duration::from_secs(1),
        alert_color: AMBER,
        alert: BlinkPattern::new(3, Duration::from_millis(300), Duration::from_millis(300)),
        gauge_hold: Duration::from_secs(2),
        first_report_retry: RetryPolicy::new(4, Duration::from_secs(1)),
    };

    #[must_use]
    pub const fn with_range(mut self, min_volts: f32, max_volts: f32) -> Self {
        self.min_volts = min_volts;
        self.max_volts = max_volts;
        self
    }

    #[must_use]
    pub const fn with_warning_volts(mut self, volts: f32) -> Self {
        self.warning_volts = volts;
        self
    }

    #[must_use]
    pub const fn with_sampling(mut self, samples: u8, delay: Duration) -> Self {
        self.samples = samples;
        self.sample_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub const fn with_stop_poll(mut self, stop_poll: Duration) -> Self {
        self.stop_poll = stop_poll;
        self
    }

    #[must_use]
    pub const fn with_alert(mut self, color: Rgb, alert: BlinkPattern) -> Self {
        self.alert_color = color;
        self.alert = alert;
        self
    }

    #[must_use]
    pub const fn with_gauge_hold(mut self, hold: Duration) -> Self {
        self.gauge_hold = hold;
        self
    }

    #[must_use]
    pub const fn with_first_report_retry(mut self, retry: RetryPolicy) -> Self {
        self.first_report_retry = retry;
        self
    }
}

/// Tag polling loop
#[derive(Clone, Copy, Debug)]
pub struct PollConfig {
    /// How long one reader poll waits for a tag
    pub poll_timeout: Duration,
    /// Pause between two polls
    pub idle: Duration,
}

impl PollConfig {
    pub const DEFAULT: Self = Self {
        poll_timeout: Duration::from_millis(500),
        idle: Duration::from_millis(200),
    };

    #[must_use]
    pub const fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_idle(mut self, idle: Duration) -> Self {
        self.idle = idle;
        self
    }
}

/// Admin menu feedback and the reachability probe
#[derive(Clone, Copy, Debug)]
pub struct AdminConfig {
    pub probe_address: Ipv4Addr,
    pub probe_port: u16,
    pub probe_timeout: Duration,
    /// Length of the confirmation flashes
    pub flash: Duration,
    /// Flash color for stray admin taps
    pub neutral_color: Rgb,
    /// At or below this percentage the battery check adds a warning
    pub critical_percent: u8,
    pub critical_alert: BlinkPattern,
}

impl AdminConfig {
    pub const DEFAULT: Self = Self {
        probe_address: Ipv4Addr::new(8, 8, 8, 8),
        probe_port: 53,
        probe_timeout: Duration::from_secs(3),
        flash: Duration::from_millis(500),
        neutral_color: WHITE,
        critical_percent: 10,
        critical_alert: BlinkPattern::new(3, Duration::from_millis(150), Duration::from_millis(150)),
    };

    #[must_use]
    pub const fn with_probe(mut self, address: Ipv4Addr, port: u16, timeout: Duration) -> Self {
        self.probe_address = address;
        self.probe_port = port;
        self.probe_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_flash(mut self, flash: Duration) -> Self {
        self.flash = flash;
        self
    }

    #[must_use]
    pub const fn with_critical_alert(mut self, alert: BlinkPattern) -> Self {
        self.critical_alert = alert;
        self
    }
}

/// Tap handling feedback
#[derive(Clone, Copy, Debug)]
pub struct TapConfig {
    pub error_color: Rgb,
    /// Length of the error flash after a failed server call
    pub error_flash: Duration,
    pub beep: Duration,
}

impl TapConfig {
    pub const DEFAULT: Self = Self {
        error_color: RED,
        error_flash: Duration::from_millis(500),
        beep: Duration::from_millis(100),
    };

    #[must_use]
    pub const fn with_error_flash(mut self, flash: Duration) -> Self {
        self.error_flash = flash;
        self
    }
}

/// Start-up spinners
#[derive(Clone, Copy, Debug)]
pub struct BootConfig {
    pub boot: (Rgb, Duration),
    pub online: (Rgb, Duration),
    pub offline: (Rgb, Duration),
    pub hotspot: (Rgb, Duration),
    /// Spinner step while announcing the hotspot
    pub hotspot_step: Duration,
}

impl BootConfig {
    pub const DEFAULT: Self = Self {
        boot: (WHITE, Duration::from_secs(1)),
        online: (GREEN, Duration::from_secs(2)),
        offline: (RED, Duration::from_secs(1)),
        hotspot: (BLUE, Duration::from_secs(2)),
        hotspot_step: Duration::from_millis(80),
    };

    /// Same sequence with every spinner shortened to `duration`
    #[must_use]
    pub const fn with_spin_duration(mut self, duration: Duration) -> Self {
        self.boot.1 = duration;
        self.online.1 = duration;
        self.offline.1 = duration;
        self.hotspot.1 = duration;
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DeviceConfig {
    /// Name sent with every tap
    pub device_name: &'static str,
    pub server: ServerConfig,
    pub battery: BatteryConfig,
    pub poll: PollConfig,
    pub admin: AdminConfig,
    pub tap: TapConfig,
    pub boot: BootConfig,
    pub animations: AnimationTimings,
    /// Hardware bring-up retries
    pub startup_retry: RetryPolicy,
}

impl DeviceConfig {
    pub const DEFAULT: Self = Self {
        device_name: "Entrance",
        server: ServerConfig::DEFAULT,
        battery: BatteryConfig::DEFAULT,
        poll: PollConfig::DEFAULT,
        admin: AdminConfig::DEFAULT,
        tap: TapConfig::DEFAULT,
        boot: BootConfig::DEFAULT,
        animations: AnimationTimings::DEFAULT,
        startup_retry: RetryPolicy::new(3, Duration::from_millis(200)),
    };

    #[must_use]
    pub const fn with_device_name(mut self, name: &'static str) -> Self {
        self.device_name = name;
        self
    }

    #[must_use]
    pub const fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }

    #[must_use]
    pub const fn with_battery(mut self, battery: BatteryConfig) -> Self {
        self.battery = battery;
        self
    }

    #[must_use]
    pub const fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    #[must_use]
    pub const fn with_admin(mut self, admin: AdminConfig) -> Self {
        self.admin = admin;
        self
    }

    #[must_use]
    pub const fn with_tap(mut self, tap: TapConfig) -> Self {
        self.tap = tap;
        self
    }

    #[must_use]
    pub const fn with_boot(mut self, boot: BootConfig) -> Self {
        self.boot = boot;
        self
    }

    #[must_use]
    pub const fn with_animations(mut self, animations: AnimationTimings) -> Self {
        self.animations = animations;
        self
    }

    #[must_use]
    pub const fn with_startup_retry(mut self, retry: RetryPolicy) -> Self {
        self.startup_retry = retry;
        self
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
