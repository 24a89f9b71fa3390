use crate::domain::dto::ServerDecision;
use crate::domain::entity::TagId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// Name resolution or connect failed
    Unreachable,
    /// Request did not complete in time
    Timeout,
    /// Connection broke mid-request
    Io,
    /// Server answered with a status other than success
    Status(u16),
    /// Response could not be parsed
    Parse,
    /// Request or response did not fit the buffers
    BufferOverflow,
}

/// Asks the authorization server what to do with a tag
pub trait TapAuthorizer {
    async fn authorize(&self, card: &TagId) -> Result<ServerDecision, NetworkError>;
}

/// Sends battery levels to the server
pub trait BatteryReporter {
    async fn report_battery(&self, percentage: u8) -> Result<(), NetworkError>;
}
