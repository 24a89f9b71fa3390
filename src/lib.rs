#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

//! Tap-to-enter access point
//!
//! Polls a tag reader, asks the authorization server about every tag and
//! plays the answer on the LED ring, while a background monitor keeps an
//! eye on the battery.

pub mod app;
pub mod config;
pub mod controllers;
pub mod core;
pub mod domain;
pub mod infrastructure;
