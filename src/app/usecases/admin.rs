use tapring_light_composer::{AnimationRequest, Rgb};
use tapring_light_composer::color::{BLUE, GREEN, RED};

use crate::app::usecases::battery::level_color;
use crate::config::AdminConfig;
use crate::domain::entity::{AdminAction, AdminMenuState, HotspotState};
use crate::domain::ports::{AdminHandler, BatteryGauge, ConnectivityProbe, Hotspot, LightPlayer};

/// Admin card menu
///
/// Consecutive admin taps walk through battery check, connectivity check and
/// hotspot toggle. Any ordinary tap in between starts the sequence over.
pub struct AdminMenu<'a, L, G, P, H> {
    lights: &'a L,
    gauge: &'a G,
    probe: &'a P,
    hotspot: &'a H,
    state: AdminMenuState,
    hotspot_state: HotspotState,
    config: AdminConfig,
}

impl<'a, L, G, P, H> AdminMenu<'a, L, G, P, H>
where
    L: LightPlayer,
    G: BatteryGauge,
    P: ConnectivityProbe,
    H: Hotspot,
{
    pub const fn new(
        lights: &'a L,
        gauge: &'a G,
        probe: &'a P,
        hotspot: &'a H,
        config: AdminConfig,
    ) -> Self {
        Self {
            lights,
            gauge,
            probe,
            hotspot,
            state: AdminMenuState::new(),
            hotspot_state: HotspotState { enabled: false },
            config,
        }
    }

    async fn flash(&self, color: Rgb) {
        self.lights
            .play(AnimationRequest::solid(color, self.config.flash))
            .await;
    }

    async fn battery_check(&self) {
        let Some(reading) = self.gauge.read_battery().await else {
            log::warn!("admin: battery reading unavailable");
            self.flash(RED).await;
            return;
        };
        log::info!("admin: battery at {}%", reading.percentage);
        self.lights
            .gauge(
                reading.percentage,
                level_color(reading.percentage),
                self.config.flash,
            )
            .await;
        if reading.percentage <= self.config.critical_percent {
            self.lights.blink(RED, self.config.critical_alert).await;
        }
    }

    async fn connectivity_check(&self) {
        let online = self.probe.is_online().await;
        log::info!("admin: online={}", online);
        self.flash(if online { GREEN } else { RED }).await;
    }

    async fn toggle_hotspot(&mut self) {
        let enable = !self.hotspot_state.enabled;
        let done = if enable {
            self.hotspot.start_hotspot().await
        } else {
            self.hotspot.stop_hotspot().await
        };

        if done {
            self.hotspot_state.enabled = enable;
            log::info!("admin: hotspot {}", if enable { "on" } else { "off" });
            self.flash(BLUE).await;
        } else {
            log::warn!("admin: hotspot toggle failed");
            self.flash(RED).await;
        }
    }
}

impl<L, G, P, H> AdminHandler for AdminMenu<'_, L, G, P, H>
where
    L: LightPlayer,
    G: BatteryGauge,
    P: ConnectivityProbe,
    H: Hotspot,
{
    fn tap_count(&self) -> u8 {
        self.state.tap_count()
    }

    fn reset(&mut self) {
        if self.state.tap_count() > 0 {
            log::debug!("admin: sequence cancelled");
        }
        self.state.reset();
    }

    fn hotspot_enabled(&self) -> bool {
        self.hotspot_state.enabled
    }

    async fn handle_admin_tap(&mut self) -> AdminAction {
        let action = self.state.advance();
        log::info!("admin: {:?}", action);
        match action {
            AdminAction::BatteryCheck => self.battery_check().await,
            AdminAction::ConnectivityCheck => self.connectivity_check().await,
            AdminAction::HotspotToggle => self.toggle_hotspot().await,
            AdminAction::Overflow => self.flash(self.config.neutral_color).await,
        }
        action
    }

    async fn is_online(&self) -> bool {
        self.probe.is_online().await
    }

    async fn enable_hotspot(&mut self) -> bool {
        if self.hotspot_state.enabled {
            return true;
        }
        let started = self.hotspot.start_hotspot().await;
        self.hotspot_state.enabled = started;
        started
    }
}
