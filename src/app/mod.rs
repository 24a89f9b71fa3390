mod retry;
pub mod usecases;

pub use retry::{RetryPolicy, retry};
pub use usecases::{AdminMenu, BatteryMonitor, TapSession, level_color};
