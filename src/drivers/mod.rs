//! Hardware adapters (Linux only, behind the `hardware` feature).
//!
//! These implement the port traits and produce the raw events; no
//! domain logic lives here.

pub mod buttons;
pub mod display;
