pub mod color;
pub mod dto;
pub mod entity;
pub mod ports;
