use embassy_time::Duration;

use crate::domain::entity::TagId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagReaderError {
    /// Reader did not answer or answered garbage during bring-up
    HardwareFault,
    /// Bus transfer failed
    Bus,
    /// Frame failed a length or checksum check
    Protocol,
}

pub trait TagReader {
    /// Bring the reader up and configure it for passive targets
    async fn init(&mut self) -> Result<(), TagReaderError>;

    /// Wait up to `timeout` for a tag in the field
    async fn poll_once(&mut self, timeout: Duration) -> Result<Option<TagId>, TagReaderError>;
}
