mod ads1115;
mod buzzer;
mod pn532;

pub use ads1115::{ADS1115_ADDRESS, Ads1115};
pub use buzzer::Buzzer;
pub use pn532::{FirmwareVersion, PN532_ADDRESS, Pn532};
