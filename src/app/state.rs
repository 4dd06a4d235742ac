//! Single-source-of-truth application state and its transition function.
//!
//! Exactly one [`AppState`] is live at any time. Every incoming event
//! produces a complete replacement snapshot via [`apply`]; the old one
//! is discarded. `apply` is pure and total: it never fails and never
//! touches hardware, which keeps the whole transition table a plain
//! unit-test subject.

use crate::events::{Event, SensorKind};

// ── Display mode ──────────────────────────────────────────────

/// Screen identifiers, in cycle order. Membership is closed; the
/// primary button walks this ring one step per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DisplayMode {
    #[default]
    Default = 0,
    Room = 1,
    Data = 2,
    Egg = 3,
}

impl DisplayMode {
    /// All modes in cycle order.
    pub const ALL: [DisplayMode; 4] = [Self::Default, Self::Room, Self::Data, Self::Egg];

    /// Number of screens in the cycle.
    pub const COUNT: usize = Self::ALL.len();

    /// The cyclic successor: the last mode wraps back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::COUNT]
    }

    /// Uppercase label used in logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Room => "ROOM",
            Self::Data => "DATA",
            Self::Egg => "EGG",
        }
    }
}

// ── Readings ──────────────────────────────────────────────────

/// Latest known value per named measurement. `None` means no reading
/// has arrived since startup. Values pass through unvalidated; the
/// renderer formats whatever the sensor reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    pub temperature_water: Option<f64>,
    pub temperature_room: Option<f64>,
    pub humidity_room: Option<f64>,
}

// ── Application state ─────────────────────────────────────────

/// One immutable snapshot of the whole application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AppState {
    pub readings: Readings,
    pub mode: DisplayMode,
}

impl AppState {
    /// The startup snapshot: all readings unknown, mode `DEFAULT`.
    pub fn startup() -> Self {
        Self::default()
    }
}

// ── Transition function ───────────────────────────────────────

/// Apply one event to the current snapshot, producing the next one.
///
/// Events outside the store's vocabulary (`SecondaryPressed`,
/// `Shutdown`, and anything added later) are a no-op, not an error:
/// the input snapshot is returned unchanged.
pub fn apply(state: &AppState, event: &Event) -> AppState {
    match event {
        Event::ReadingUpdated { sensor, value } => {
            let mut next = *state;
            match sensor {
                SensorKind::WaterTemperature => next.readings.temperature_water = Some(*value),
                SensorKind::RoomTemperature => next.readings.temperature_room = Some(*value),
                SensorKind::RoomHumidity => next.readings.humidity_room = Some(*value),
            }
            next
        }
        Event::AdvanceDisplayMode => AppState {
            mode: state.mode.next(),
            ..*state
        },
        _ => *state,
    }
}
