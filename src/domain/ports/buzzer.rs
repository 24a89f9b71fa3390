/// Audible acknowledgment, best-effort
pub trait Beeper {
    async fn beep(&mut self);
}
