//! Hardware side of the device
//!
//! Concrete drivers, the services that need the radio, and the background
//! tasks the executor runs next to the polling loop.

pub(crate) mod config;
pub(crate) mod drivers;
pub(crate) mod services;
pub(crate) mod tasks;
pub(crate) mod types;
