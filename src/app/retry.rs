use core::fmt::Debug;

use embassy_time::{Duration, Timer};

/// Bounded attempts with a fixed pause in between
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u8,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub const fn new(attempts: u8, backoff: Duration) -> Self {
        Self { attempts, backoff }
    }
}

/// Run `op` until it succeeds or the attempts run out, returning the last error
///
/// At least one attempt is always made.
pub async fn retry<T, E: Debug>(
    policy: RetryPolicy,
    what: &str,
    mut op: impl AsyncFnMut() -> Result<T, E>,
) -> Result<T, E> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= attempts => {
                log::error!("{}: giving up after {} attempts: {:?}", what, attempts, e);
                return Err(e);
            }
            Err(e) => {
                log::warn!("{}: attempt {}/{} failed: {:?}", what, attempt, attempts, e);
                attempt += 1;
                Timer::after(policy.backoff).await;
            }
        }
    }
}
