use crate::domain::dto::ServerDecision;
use crate::domain::entity::{AdminAction, TagId};
use crate::domain::ports::NetworkError;

/// Result of handling one tap
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Ordinary card, the decision was played
    Decision(ServerDecision),
    /// Admin card, the menu ran this action
    Admin(AdminAction),
    /// Server call failed, the error flash was played
    Failed(NetworkError),
}

/// Outcome of the start-up sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootReport {
    pub online: bool,
    pub hotspot: bool,
}

/// Admin menu as seen by the tap flow
pub trait AdminHandler {
    fn tap_count(&self) -> u8;

    /// Cancel an admin sequence in progress
    fn reset(&mut self);

    fn hotspot_enabled(&self) -> bool;

    async fn handle_admin_tap(&mut self) -> AdminAction;

    async fn is_online(&self) -> bool;

    /// Start the hotspot unless it already runs
    async fn enable_hotspot(&mut self) -> bool;
}

pub trait TapHandler {
    async fn handle_tap(&mut self, card: &TagId) -> TapOutcome;
}

pub trait BootHandler {
    async fn boot(&mut self) -> BootReport;
}
