//! Reaction policy: which applied events warrant an immediate redraw.
//!
//! Redrawing the whole frame over I2C is expensive relative to the
//! 1 Hz poll rate, so readings that are not visible on the currently
//! active screen do not trigger a render; their values are picked up
//! lazily the next time a screen that shows them is drawn.
//!
//! The rule table lives in one function, keyed on the (event, resulting
//! mode) pair, instead of being scattered across call sites.

use crate::app::state::{AppState, DisplayMode};
use crate::events::{Event, SensorKind};

/// Decide whether the renderer should run for `event`, evaluated once
/// against the state that resulted from applying it.
pub fn should_render(event: &Event, new_state: &AppState) -> bool {
    match (event, new_state.mode) {
        // A mode change always repaints the new screen.
        (Event::AdvanceDisplayMode, _) => true,

        // Water temperature is surfaced on DEFAULT and DATA only.
        (
            Event::ReadingUpdated {
                sensor: SensorKind::WaterTemperature,
                ..
            },
            DisplayMode::Default | DisplayMode::Data,
        ) => true,

        // Everything else: no immediate redraw.
        _ => false,
    }
}
