//! Recording mock display for integration tests.
//!
//! Records every port call so tests can assert on the full display
//! command history without touching a real I2C bus.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;
use tankview::app::ports::DisplayPort;

// ── Display call record ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCall {
    ClearFrame,
    /// One `draw_iter` batch; carries the number of lit pixels.
    Draw(usize),
    FlushFrame,
    SetInverted(bool),
    PowerOff,
}

// ── RecordingDisplay ──────────────────────────────────────────

pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Number of completed frames pushed to the "device".
    pub fn flushes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == DisplayCall::FlushFrame)
            .count()
    }

    /// Most recent inversion command, if any.
    pub fn last_inversion(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::SetInverted(on) => Some(*on),
            _ => None,
        })
    }

    /// Calls recorded since the most recent `ClearFrame`.
    pub fn since_last_clear(&self) -> &[DisplayCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DisplayCall::ClearFrame)
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    /// Whether anything was drawn in the most recent frame.
    pub fn last_frame_has_content(&self) -> bool {
        self.since_last_clear()
            .iter()
            .any(|c| matches!(c, DisplayCall::Draw(n) if *n > 0))
    }
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for RecordingDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let lit = pixels
            .into_iter()
            .filter(|Pixel(_, color)| *color == BinaryColor::On)
            .count();
        self.calls.push(DisplayCall::Draw(lit));
        Ok(())
    }
}

impl DisplayPort for RecordingDisplay {
    fn clear_frame(&mut self) {
        self.calls.push(DisplayCall::ClearFrame);
    }

    fn flush_frame(&mut self) {
        self.calls.push(DisplayCall::FlushFrame);
    }

    fn set_inverted(&mut self, inverted: bool) {
        self.calls.push(DisplayCall::SetInverted(inverted));
    }

    fn power_off(&mut self) {
        self.calls.push(DisplayCall::PowerOff);
    }
}
