pub mod drivers;
pub mod services;
