//! Event queue feeding the single dispatcher loop.
//!
//! Events are produced by:
//! - the sensor poller thread (periodic water temperature readings)
//! - GPIO edge callbacks (button presses)
//! - the termination-signal handler (shutdown request)
//!
//! Producers only enqueue; the main loop is the sole consumer and
//! processes each event to completion before taking the next. The
//! queue is bounded and enqueueing never blocks: when the consumer
//! falls behind, the event is dropped and logged (the next poll tick
//! or button edge is the retry).

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use log::warn;

use crate::error::{Error, Result};

// ── Sensor identity ───────────────────────────────────────────

/// The closed set of named readings the store tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    WaterTemperature,
    RoomTemperature,
    RoomHumidity,
}

impl SensorKind {
    /// Wire/log name of this reading.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WaterTemperature => "temperature_water",
            Self::RoomTemperature => "temperature_room",
            Self::RoomHumidity => "humidity_room",
        }
    }

    /// Resolve a reading name at the event boundary.
    ///
    /// Only the three defined readings exist; anything else is rejected
    /// so a mistyped event source cannot silently create a new reading.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "temperature_water" => Ok(Self::WaterTemperature),
            "temperature_room" => Ok(Self::RoomTemperature),
            "humidity_room" => Ok(Self::RoomHumidity),
            other => Err(Error::InvalidEvent(other.to_string())),
        }
    }
}

// ── Events ────────────────────────────────────────────────────

/// Inputs to the application dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A sensor produced a new value for the named reading.
    ReadingUpdated { sensor: SensorKind, value: f64 },
    /// Primary button pressed: advance to the next screen.
    AdvanceDisplayMode,
    /// Secondary button pressed: mode-specific diagnostic action.
    SecondaryPressed,
    /// Termination signal received: run the shutdown sequence.
    Shutdown,
}

// ── Bounded queue ─────────────────────────────────────────────

/// Cloneable producer handle for the event queue.
#[derive(Clone)]
pub struct EventTx {
    tx: SyncSender<Event>,
}

/// Create the bounded event queue. The `Receiver` end belongs to the
/// dispatcher loop; `EventTx` clones go to the producers.
pub fn event_queue(capacity: usize) -> (EventTx, Receiver<Event>) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (EventTx { tx }, rx)
}

impl EventTx {
    /// Enqueue an event without blocking.
    /// Returns `false` if the queue is full or closed (event dropped).
    pub fn push(&self, event: Event) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!("event queue full, dropping {event:?}");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}
