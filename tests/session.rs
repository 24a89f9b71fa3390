//! Tap handling, the admin menu and the start-up sequence.

mod common;

use common::{
    FakeBeeper, FakeGauge, FakeHotspot, FakeProbe, FakeServer, FakeTransport, Lights, RING,
    colors_shown, http_ok, is_dark, lights, lit_frames,
};
use embassy_futures::block_on;
use embassy_time::{Duration, Instant};
use tapring::app::{AdminMenu, TapSession};
use tapring::config::{AdminConfig, BootConfig, ServerConfig, TapConfig};
use tapring::core::net::TransportError;
use tapring::domain::dto::{ServerDecision, TapResponse};
use tapring::domain::entity::{AdminAction, AdminMenuState, BatteryReading, TagId};
use tapring::domain::ports::{
    AdminHandler, BootHandler, BootReport, NetworkError, TapAuthorizer, TapHandler, TapOutcome,
};
use tapring::infrastructure::services::HttpAuthServer;
use tapring_light_composer::color::{BLUE, GREEN, RED, WHITE};
use tapring_light_composer::{AnimationKind, BlinkPattern, Rgb};

const CARD: [u8; 4] = [0x04, 0xA2, 0x24, 0xFF];

fn admin_config() -> AdminConfig {
    AdminConfig::DEFAULT
        .with_flash(Duration::from_millis(5))
        .with_critical_alert(BlinkPattern::new(
            2,
            Duration::from_millis(2),
            Duration::from_millis(2),
        ))
}

fn tap_config() -> TapConfig {
    TapConfig::DEFAULT.with_error_flash(Duration::from_millis(20))
}

fn boot_config() -> BootConfig {
    BootConfig::DEFAULT.with_spin_duration(Duration::from_millis(30))
}

fn decision(card_type: &str, color: &str) -> ServerDecision {
    ServerDecision::from(TapResponse {
        color: Some(color),
        duration: Some(10.0),
        card_type: Some(card_type),
        animation: Some("solid"),
    })
}

struct Rig {
    lights: Lights,
    gauge: FakeGauge,
    probe: FakeProbe,
    hotspot: FakeHotspot,
    server: FakeServer,
}

type Menu<'a> = AdminMenu<'a, Lights, FakeGauge, FakeProbe, FakeHotspot>;
type Session<'a, A> = TapSession<'a, Lights, A, Menu<'a>, FakeBeeper>;

impl Rig {
    fn new() -> (Self, common::RecordingDriver) {
        let (lights, driver) = lights();
        let rig = Self {
            lights,
            gauge: FakeGauge::with_percentage(80),
            probe: FakeProbe::default(),
            hotspot: FakeHotspot::default(),
            server: FakeServer::default(),
        };
        (rig, driver)
    }

    fn menu(&self) -> Menu<'_> {
        AdminMenu::new(
            &self.lights,
            &self.gauge,
            &self.probe,
            &self.hotspot,
            admin_config(),
        )
    }

    fn session<'a, A: TapAuthorizer>(&'a self, server: &'a A) -> Session<'a, A> {
        TapSession::new(
            &self.lights,
            server,
            self.menu(),
            Some(FakeBeeper::default()),
            tap_config(),
            boot_config(),
        )
    }
}

#[test]
fn ordinary_tap_plays_server_decision() {
    let (rig, driver) = Rig::new();
    let body = r#"{"color":"000255000","duration":500,"card_type":"access","animation":"solid"}"#;
    let transport = FakeTransport::replying(&http_ok(body));
    let server = HttpAuthServer::new(&transport, &ServerConfig::DEFAULT, "Entrance");
    let mut session = rig.session(&server);

    let started = Instant::now();
    let outcome = block_on(session.handle_tap(&TagId::from_bytes(&CARD)));
    let elapsed = started.elapsed();

    let decision = match outcome {
        TapOutcome::Decision(decision) => decision,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(decision.color, GREEN);
    assert_eq!(decision.animation, AnimationKind::Solid);
    assert!(!decision.is_admin());

    let frames = driver.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], vec![GREEN; RING]);
    assert!(is_dark(&frames[1]));
    assert!(elapsed >= Duration::from_millis(500));
    assert_eq!(session.admin().tap_count(), 0);

    let request = transport.last_request();
    assert!(request.starts_with("POST /tap HTTP/1.1\r\n"));
    assert!(request.ends_with(r#"{"device":"Entrance","card":"04a224ff"}"#));
}

#[test]
fn unreachable_server_flashes_red_and_keeps_count() {
    let (rig, driver) = Rig::new();
    rig.server.answer(Ok(decision("ADMIN", "000000000")));
    rig.server.answer(Err(NetworkError::Unreachable));
    let mut session = rig.session(&rig.server);
    let card = TagId::from_bytes(&CARD);

    block_on(session.handle_tap(&card));
    assert_eq!(session.admin().tap_count(), 1);
    driver.reset();

    let started = Instant::now();
    let outcome = block_on(session.handle_tap(&card));

    assert_eq!(outcome, TapOutcome::Failed(NetworkError::Unreachable));
    assert!(started.elapsed() >= Duration::from_millis(20));
    assert_eq!(colors_shown(&driver.frames()), vec![RED]);
    assert!(is_dark(driver.frames().last().unwrap()));
    assert_eq!(session.admin().tap_count(), 1);
}

#[test]
fn transport_failure_maps_to_unreachable() {
    let (rig, _) = Rig::new();
    let transport = FakeTransport::default();
    transport.error.set(Some(TransportError::Connect));
    let server = HttpAuthServer::new(&transport, &ServerConfig::DEFAULT, "Entrance");
    let mut session = rig.session(&server);

    let outcome = block_on(session.handle_tap(&TagId::from_bytes(&CARD)));
    assert_eq!(outcome, TapOutcome::Failed(NetworkError::Unreachable));
}

#[test]
fn every_tap_beeps() {
    let (rig, _) = Rig::new();
    let beeper = FakeBeeper::default();
    let mut session = TapSession::new(
        &rig.lights,
        &rig.server,
        rig.menu(),
        Some(beeper.clone()),
        tap_config(),
        boot_config(),
    );

    block_on(session.handle_tap(&TagId::from_bytes(&CARD)));
    block_on(session.handle_tap(&TagId::from_bytes(&CARD)));
    assert_eq!(beeper.beeps.get(), 2);
}

#[test]
fn admin_taps_walk_the_menu() {
    let (rig, driver) = Rig::new();
    for _ in 0..3 {
        rig.server.answer(Ok(decision("admin", "000000000")));
    }
    rig.probe.online.set(true);
    let mut session = rig.session(&rig.server);
    let card = TagId::from_bytes(&CARD);

    assert_eq!(
        block_on(session.handle_tap(&card)),
        TapOutcome::Admin(AdminAction::BatteryCheck)
    );
    assert_eq!(session.admin().tap_count(), 1);
    assert_eq!(rig.gauge.reads.get(), 1);
    // 80% of 24 pixels, green
    let lit = lit_frames(&driver.frames());
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0].iter().filter(|pixel| **pixel == GREEN).count(), 20);
    driver.reset();

    assert_eq!(
        block_on(session.handle_tap(&card)),
        TapOutcome::Admin(AdminAction::ConnectivityCheck)
    );
    assert_eq!(session.admin().tap_count(), 2);
    assert_eq!(rig.probe.probes.get(), 1);
    assert_eq!(colors_shown(&driver.frames()), vec![GREEN]);
    driver.reset();

    assert_eq!(
        block_on(session.handle_tap(&card)),
        TapOutcome::Admin(AdminAction::HotspotToggle)
    );
    assert_eq!(session.admin().tap_count(), 0);
    assert_eq!(rig.hotspot.starts.get(), 1);
    assert!(session.admin().hotspot_enabled());
    assert_eq!(colors_shown(&driver.frames()), vec![BLUE]);
}

#[test]
fn ordinary_tap_cancels_admin_sequence() {
    let (rig, _) = Rig::new();
    rig.server.answer(Ok(decision("ADMIN", "000000000")));
    rig.server.answer(Ok(decision("ADMIN", "000000000")));
    rig.server.answer(Ok(decision("member", "000000255")));
    rig.server.answer(Ok(decision("ADMIN", "000000000")));
    let mut session = rig.session(&rig.server);
    let card = TagId::from_bytes(&CARD);

    block_on(session.handle_tap(&card));
    block_on(session.handle_tap(&card));
    assert_eq!(session.admin().tap_count(), 2);

    assert!(matches!(
        block_on(session.handle_tap(&card)),
        TapOutcome::Decision(_)
    ));
    assert_eq!(session.admin().tap_count(), 0);

    assert_eq!(
        block_on(session.handle_tap(&card)),
        TapOutcome::Admin(AdminAction::BatteryCheck)
    );
}

#[test]
fn hotspot_toggle_switches_off_again() {
    let (rig, driver) = Rig::new();
    let mut menu = rig.menu();

    for _ in 0..3 {
        block_on(menu.handle_admin_tap());
    }
    assert!(menu.hotspot_enabled());

    driver.reset();
    for _ in 0..3 {
        block_on(menu.handle_admin_tap());
    }
    assert!(!menu.hotspot_enabled());
    assert_eq!(rig.hotspot.stops.get(), 1);
}

#[test]
fn failed_hotspot_toggle_flashes_red_and_keeps_state() {
    let (rig, driver) = Rig::new();
    rig.hotspot.works.set(false);
    let mut menu = rig.menu();

    block_on(menu.handle_admin_tap());
    block_on(menu.handle_admin_tap());
    driver.reset();
    assert_eq!(block_on(menu.handle_admin_tap()), AdminAction::HotspotToggle);

    assert!(!menu.hotspot_enabled());
    assert_eq!(colors_shown(&driver.frames()), vec![RED]);
    assert_eq!(menu.tap_count(), 0);
}

#[test]
fn offline_connectivity_check_flashes_red() {
    let (rig, driver) = Rig::new();
    let mut menu = rig.menu();

    block_on(menu.handle_admin_tap());
    driver.reset();
    block_on(menu.handle_admin_tap());

    assert_eq!(colors_shown(&driver.frames()), vec![RED]);
}

#[test]
fn critical_battery_adds_warning() {
    let (rig, driver) = Rig::new();
    rig.gauge.reading.set(Some(BatteryReading {
        volts: 3.05,
        percentage: 8,
    }));
    let mut menu = rig.menu();

    block_on(menu.handle_admin_tap());

    let lit = lit_frames(&driver.frames());
    // Level bar then two alert blinks, all red
    assert_eq!(lit.len(), 3);
    assert_eq!(lit[0].iter().filter(|pixel| **pixel == RED).count(), 2);
    assert_eq!(lit[1], vec![RED; RING]);
    assert!(is_dark(driver.frames().last().unwrap()));
}

#[test]
fn missing_battery_reading_flashes_red() {
    let (rig, driver) = Rig::new();
    rig.gauge.reading.set(None);
    let mut menu = rig.menu();

    assert_eq!(block_on(menu.handle_admin_tap()), AdminAction::BatteryCheck);
    assert_eq!(lit_frames(&driver.frames()), vec![vec![RED; RING]]);
}

#[test]
fn stray_admin_taps_overflow_and_reset() {
    let mut state = AdminMenuState::from_tap_count(3);
    assert_eq!(state.advance(), AdminAction::Overflow);
    assert_eq!(state.tap_count(), 0);

    let mut state = AdminMenuState::from_tap_count(9);
    assert_eq!(state.advance(), AdminAction::Overflow);
    assert_eq!(state.advance(), AdminAction::BatteryCheck);
}

#[test]
fn decision_defaults_apply() {
    let decision = ServerDecision::from(TapResponse::default());
    assert_eq!(decision.color, Rgb::default());
    assert_eq!(decision.duration, Duration::from_millis(1000));
    assert_eq!(decision.animation, AnimationKind::Solid);
    assert!(!decision.is_admin());

    let decision = ServerDecision::from(TapResponse {
        color: Some("red"),
        animation: Some("sparkle"),
        ..TapResponse::default()
    });
    assert_eq!(decision.color, Rgb::default());
    assert_eq!(decision.animation, AnimationKind::Rainbow);
}

#[test]
fn online_boot_shows_white_then_green() {
    let (rig, driver) = Rig::new();
    rig.probe.online.set(true);
    let mut session = rig.session(&rig.server);

    let report = block_on(session.boot());

    assert_eq!(
        report,
        BootReport {
            online: true,
            hotspot: false
        }
    );
    assert_eq!(colors_shown(&driver.frames()), vec![WHITE, GREEN]);
    assert_eq!(rig.hotspot.starts.get(), 0);
    assert!(is_dark(driver.frames().last().unwrap()));
}

#[test]
fn offline_boot_starts_hotspot() {
    let (rig, driver) = Rig::new();
    let mut session = rig.session(&rig.server);

    let report = block_on(session.boot());

    assert_eq!(
        report,
        BootReport {
            online: false,
            hotspot: true
        }
    );
    assert_eq!(colors_shown(&driver.frames()), vec![WHITE, RED, BLUE]);
    assert!(session.admin().hotspot_enabled());

    // The menu knows the hotspot is up, the next toggle stops it
    let menu = session.admin_mut();
    block_on(menu.handle_admin_tap());
    block_on(menu.handle_admin_tap());
    block_on(menu.handle_admin_tap());
    assert_eq!(rig.hotspot.stops.get(), 1);
}

#[test]
fn offline_boot_without_hotspot_ends_red() {
    let (rig, driver) = Rig::new();
    rig.hotspot.works.set(false);
    let mut session = rig.session(&rig.server);

    let report = block_on(session.boot());

    assert!(!report.online);
    assert!(!report.hotspot);
    assert_eq!(colors_shown(&driver.frames()), vec![WHITE, RED]);
    assert_eq!(lit_frames(&driver.frames()).last(), Some(&vec![RED; RING]));
}
