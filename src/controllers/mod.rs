mod device;

pub use device::{DeviceController, StartupError};
