#![cfg_attr(not(test), no_std)]

//! LED ring animation engine
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction (`[LedDriver]` trait)
//! - `ring` - Fixed-size pixel buffer with a single present point
//! - `animation` - Time-driven renderers (solid, spin, split, rainbow, gauge, blink)
//! - `ownership` - Mutual exclusion over the ring shared by every caller
//!
//! Everything is generic over `LedDriver`, allowing different hardware backends.

pub mod animation;
pub mod color;
pub mod driver;
mod guard;
pub mod math8;
pub mod ownership;
pub mod ring;

// Animation exports
pub use animation::{AnimationKind, AnimationRequest, AnimationTimings, BlinkPattern};

// Color exports
pub use color::Rgb;

// Driver exports
pub use driver::LedDriver;

// Ownership exports
pub use ownership::LedOwnership;

// Ring exports
pub use ring::Ring;
