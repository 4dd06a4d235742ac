//! Display renderer: composes the active screen onto a [`DisplayPort`].
//!
//! The only code in the crate permitted to touch the display. Every
//! render fully clears the previous frame, draws the screen selected by
//! `state.mode`, and flushes — the device has no partial-redraw
//! primitive in use.
//!
//! Screen text content is built by small pure helpers so the exact
//! strings are unit-testable without a frame buffer.

pub mod assets;

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_7X14, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use log::warn;

use crate::app::ports::DisplayPort;
use crate::app::state::{AppState, DisplayMode};

// ── Numeric formatting ────────────────────────────────────────

/// Format a reading for display: round to the nearest 0.01, then print
/// with exactly one decimal place. An absent reading formats as `0`.
pub fn format_reading(value: Option<f64>) -> String {
    match value {
        None => "0".to_string(),
        Some(v) => format!("{:.1}", (v * 100.0).round() / 100.0),
    }
}

// ── Screen content (pure) ─────────────────────────────────────

/// Value line of the DEFAULT screen.
pub fn water_value_line(state: &AppState) -> String {
    format!("{}°c", format_reading(state.readings.temperature_water))
}

/// Combined conditions line of the ROOM screen.
pub fn room_line(state: &AppState) -> String {
    format!(
        "{}°c {}%",
        format_reading(state.readings.temperature_room),
        format_reading(state.readings.humidity_room)
    )
}

// ── Rendering ─────────────────────────────────────────────────

/// Redraw the active screen from `state`. Clear, draw, flush.
pub fn render<D: DisplayPort>(display: &mut D, state: &AppState) {
    display.clear_frame();

    match state.mode {
        DisplayMode::Default => {
            draw_text(display, "Water Temp", &FONT_6X10, Point::new(1, 1));
            draw_text(display, &water_value_line(state), &FONT_10X20, Point::new(1, 14));
        }
        DisplayMode::Room => {
            draw_text(display, "Room", &FONT_6X10, Point::new(1, 1));
            draw_text(display, &room_line(state), &FONT_7X14, Point::new(1, 14));
        }
        DisplayMode::Data => {
            // Reserved screen; label only until it grows content.
            draw_text(display, "DATA", &FONT_6X10, Point::new(1, 1));
        }
        DisplayMode::Egg => match assets::egg() {
            Ok(bmp) => {
                let _ = Image::new(&bmp, Point::new(32, 0)).draw(display);
            }
            // Non-fatal: the frame stays blank this cycle.
            Err(e) => warn!("EGG screen: {e}"),
        },
    }

    display.flush_frame();
}

fn draw_text<D: DisplayPort>(display: &mut D, text: &str, font: &MonoFont<'_>, origin: Point) {
    let style = MonoTextStyle::new(font, BinaryColor::On);
    let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(display);
}
