use tapring_light_composer::AnimationRequest;

use crate::app::usecases::boot::run_boot_sequence;
use crate::config::{BootConfig, TapConfig};
use crate::domain::entity::TagId;
use crate::domain::ports::{
    AdminHandler, Beeper, BootHandler, BootReport, LightPlayer, TapAuthorizer, TapHandler,
    TapOutcome,
};

/// Handles one detected tag end to end
///
/// Owns the admin menu, so the tap counter only changes from the polling
/// loop that drives this session.
pub struct TapSession<'a, L, A, M, B> {
    lights: &'a L,
    server: &'a A,
    admin: M,
    buzzer: Option<B>,
    tap: TapConfig,
    boot: BootConfig,
}

impl<'a, L, A, M, B> TapSession<'a, L, A, M, B>
where
    L: LightPlayer,
    A: TapAuthorizer,
    M: AdminHandler,
    B: Beeper,
{
    pub const fn new(
        lights: &'a L,
        server: &'a A,
        admin: M,
        buzzer: Option<B>,
        tap: TapConfig,
        boot: BootConfig,
    ) -> Self {
        Self {
            lights,
            server,
            admin,
            buzzer,
            tap,
            boot,
        }
    }

    pub const fn admin(&self) -> &M {
        &self.admin
    }

    pub fn admin_mut(&mut self) -> &mut M {
        &mut self.admin
    }
}

impl<L, A, M, B> TapHandler for TapSession<'_, L, A, M, B>
where
    L: LightPlayer,
    A: TapAuthorizer,
    M: AdminHandler,
    B: Beeper,
{
    async fn handle_tap(&mut self, card: &TagId) -> TapOutcome {
        log::info!("tap: card {}", card.as_str());
        if let Some(buzzer) = self.buzzer.as_mut() {
            buzzer.beep().await;
        }

        let decision = match self.server.authorize(card).await {
            Ok(decision) => decision,
            Err(e) => {
                log::warn!("tap: server call failed: {:?}", e);
                self.lights
                    .play(AnimationRequest::solid(
                        self.tap.error_color,
                        self.tap.error_flash,
                    ))
                    .await;
                return TapOutcome::Failed(e);
            }
        };

        if decision.is_admin() {
            let action = self.admin.handle_admin_tap().await;
            return TapOutcome::Admin(action);
        }

        self.admin.reset();
        log::info!(
            "tap: {} {}ms",
            decision.animation.as_str(),
            decision.duration.as_millis()
        );
        self.lights.play(decision.animation_request()).await;
        TapOutcome::Decision(decision)
    }
}

impl<L, A, M, B> BootHandler for TapSession<'_, L, A, M, B>
where
    L: LightPlayer,
    A: TapAuthorizer,
    M: AdminHandler,
    B: Beeper,
{
    async fn boot(&mut self) -> BootReport {
        run_boot_sequence(self.lights, &mut self.admin, &self.boot).await
    }
}
