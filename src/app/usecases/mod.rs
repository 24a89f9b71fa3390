mod admin;
mod battery;
mod boot;
mod tap;

pub use admin::AdminMenu;
pub use battery::{BatteryMonitor, level_color};
pub use boot::run_boot_sequence;
pub use tap::TapSession;
