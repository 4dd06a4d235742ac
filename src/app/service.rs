//! Application service — owns the live state and drives the pipeline.
//!
//! One event at a time: apply through the pure store, consult the
//! reaction policy against the new snapshot, render if triggered. The
//! dispatcher loop in `main` is the only caller, so apply and render
//! for one event always complete before the next event is handled.

use log::{debug, info};

use crate::app::policy::should_render;
use crate::app::ports::DisplayPort;
use crate::app::state::{apply, AppState, DisplayMode};
use crate::events::Event;
use crate::render;

/// Holds the single authoritative [`AppState`] and the display-side
/// effects that hang off it.
pub struct AppService {
    state: AppState,
    /// Current panel inversion, toggled by the EGG easter egg.
    inverted: bool,
}

impl AppService {
    pub fn new() -> Self {
        Self {
            state: AppState::startup(),
            inverted: false,
        }
    }

    /// Current snapshot (reads always observe a fully formed state).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one store event and redraw when the policy says so.
    pub fn handle_event<D: DisplayPort>(&mut self, event: Event, display: &mut D) {
        let prev_mode = self.state.mode;
        self.state = apply(&self.state, &event);
        debug!("state: {:?}", self.state);

        if self.state.mode != prev_mode {
            info!("MODE | {} -> {}", prev_mode.label(), self.state.mode.label());
        }

        if should_render(&event, &self.state) {
            render::render(display, &self.state);
        }
    }

    /// Secondary-button action: a mode-specific diagnostic.
    ///
    /// This deliberately bypasses the store and the reaction policy —
    /// it reads the current mode and acts on the display directly. The
    /// EGG inversion is the single sanctioned exception to the
    /// events-through-the-store rule; do not add more here.
    pub fn handle_secondary_press<D: DisplayPort>(&mut self, display: &mut D) {
        match self.state.mode {
            DisplayMode::Egg => {
                self.inverted = !self.inverted;
                display.set_inverted(self.inverted);
                info!("BTN2 | egg screen, inverted -> {}", self.inverted);
            }
            mode => info!("BTN2 | pressed on {} screen", mode.label()),
        }
    }

    /// Whether the panel is currently colour-inverted.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}
