//! tankview library.
//!
//! Exposes the hardware-free core (state store, reaction policy,
//! renderer, event queue, sensor parsing) for integration testing and
//! external inspection. The Linux hardware adapters live behind the
//! `hardware` cargo feature.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod render;
pub mod sensors;

mod pins;

#[cfg(feature = "hardware")]
pub mod drivers;
