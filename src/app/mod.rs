//! Application core: state store, reaction policy, and the dispatcher
//! service that ties events to the display port.
//!
//! Everything in this module is hardware-free. The only I/O boundary is
//! the [`DisplayPort`](ports::DisplayPort) trait, injected by the
//! caller, so the full event pipeline runs under host tests with mock
//! adapters.

pub mod policy;
pub mod ports;
pub mod service;
pub mod state;
