mod battery;
mod button;
mod network;

pub(crate) use battery::battery_task;
pub(crate) use button::shutdown_button_task;
pub(crate) use network::{network_runner_task, wifi_connection_task};
