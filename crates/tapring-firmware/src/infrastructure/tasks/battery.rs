use crate::infrastructure::types::Monitor;

/// Background battery monitor, returns once shutdown stops it
#[embassy_executor::task]
pub(crate) async fn battery_task(monitor: &'static Monitor) {
    monitor.run().await;
}
