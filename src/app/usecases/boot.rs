use tapring_light_composer::AnimationRequest;

use crate::config::BootConfig;
use crate::domain::ports::{AdminHandler, BootReport, LightPlayer};

/// Start-up indication
///
/// White spinner, then green when the internet answers. Offline devices show
/// red, bring the hotspot up and announce it with a fast blue spinner.
pub async fn run_boot_sequence<L, A>(lights: &L, admin: &mut A, config: &BootConfig) -> BootReport
where
    L: LightPlayer,
    A: AdminHandler,
{
    let (color, duration) = config.boot;
    lights.play(AnimationRequest::spin(color, duration)).await;

    if admin.is_online().await {
        log::info!("boot: online");
        let (color, duration) = config.online;
        lights.play(AnimationRequest::spin(color, duration)).await;
        return BootReport {
            online: true,
            hotspot: admin.hotspot_enabled(),
        };
    }

    log::warn!("boot: offline, starting hotspot");
    let (color, duration) = config.offline;
    lights.play(AnimationRequest::spin(color, duration)).await;

    let hotspot = admin.enable_hotspot().await;
    if hotspot {
        let (color, duration) = config.hotspot;
        let timings = lights.timings().with_spin_step(config.hotspot_step);
        lights
            .play_with(AnimationRequest::spin(color, duration), &timings)
            .await;
    } else {
        log::error!("boot: hotspot failed to start");
        let (color, duration) = config.offline;
        lights.play(AnimationRequest::solid(color, duration)).await;
    }

    BootReport {
        online: false,
        hotspot,
    }
}
