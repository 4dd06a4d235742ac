//! Unified error types for the tankview appliance.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! the top-level dispatch loop's error handling uniform. Nothing here
//! is fatal once the event loop is running: sensor and input failures
//! are logged and the next naturally scheduled event (poll tick, button
//! edge) is the retry.

use std::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the appliance funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The one-wire sensor could not be enumerated or read.
    Sensor(SensorError),
    /// A GPIO input line could not be claimed or watched.
    Input(InputError),
    /// An event referenced a reading name outside the defined set.
    InvalidEvent(String),
    /// The bundled image asset failed to decode.
    AssetDecode(&'static str),
    /// Peripheral bring-up failed (display, bus).
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Input(e) => write!(f, "input: {e}"),
            Self::InvalidEvent(name) => write!(f, "unknown reading name: {name}"),
            Self::AssetDecode(asset) => write!(f, "asset decode failed: {asset}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The w1 sysfs directory could not be listed.
    BusEnumerate,
    /// No DS18B20 device is present on the bus.
    NoDevices,
    /// The slave file could not be read.
    ReadFailed,
    /// The driver reported a failed CRC for this conversion.
    CrcMismatch,
    /// The slave payload did not contain a parsable temperature.
    Malformed,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusEnumerate => write!(f, "one-wire bus enumeration failed"),
            Self::NoDevices => write!(f, "no one-wire devices found"),
            Self::ReadFailed => write!(f, "slave read failed"),
            Self::CrcMismatch => write!(f, "CRC mismatch"),
            Self::Malformed => write!(f, "malformed slave payload"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The GPIO line could not be claimed.
    PinUnavailable(u8),
    /// Registering the edge interrupt failed.
    WatchFailed(u8),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinUnavailable(pin) => write!(f, "GPIO {pin} unavailable"),
            Self::WatchFailed(pin) => write!(f, "GPIO {pin} edge watch failed"),
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
