//! Integration tests for the event → store → policy → render pipeline.
//!
//! These run on the host and drive the full dispatch chain against the
//! recording mock display, including the end-to-end scenario from the
//! product walkthrough.

use crate::mock_display::{DisplayCall, RecordingDisplay};

use tankview::app::service::AppService;
use tankview::app::state::DisplayMode;
use tankview::events::{Event, SensorKind};
use tankview::render::{render, room_line, water_value_line};

fn water(value: f64) -> Event {
    Event::ReadingUpdated {
        sensor: SensorKind::WaterTemperature,
        value,
    }
}

// ── Full walkthrough ──────────────────────────────────────────

#[test]
fn full_scenario_walkthrough() {
    let mut app = AppService::new();
    let mut display = RecordingDisplay::new();

    // Start: all readings unknown, mode DEFAULT.
    assert_eq!(app.state().mode, DisplayMode::Default);

    // Water reading arrives on DEFAULT: render triggered, value shown.
    app.handle_event(water(24.0), &mut display);
    assert_eq!(display.flushes(), 1);
    assert_eq!(water_value_line(app.state()), "24.0°c");

    // Advance to ROOM: render triggered, placeholders shown.
    app.handle_event(Event::AdvanceDisplayMode, &mut display);
    assert_eq!(app.state().mode, DisplayMode::Room);
    assert_eq!(display.flushes(), 2);
    assert_eq!(room_line(app.state()), "0°c 0%");

    // Water reading while on ROOM: state updates, no render.
    app.handle_event(water(25.0), &mut display);
    assert_eq!(app.state().readings.temperature_water, Some(25.0));
    assert_eq!(display.flushes(), 2);

    // Three more advances cycle DATA -> EGG -> DEFAULT, each rendered.
    app.handle_event(Event::AdvanceDisplayMode, &mut display);
    assert_eq!(app.state().mode, DisplayMode::Data);
    app.handle_event(Event::AdvanceDisplayMode, &mut display);
    assert_eq!(app.state().mode, DisplayMode::Egg);
    app.handle_event(Event::AdvanceDisplayMode, &mut display);
    assert_eq!(app.state().mode, DisplayMode::Default);
    assert_eq!(display.flushes(), 5);

    // Back on DEFAULT the reading taken while hidden is now shown.
    assert_eq!(water_value_line(app.state()), "25.0°c");
}

// ── Render discipline ─────────────────────────────────────────

#[test]
fn render_clears_draws_then_flushes() {
    let mut display = RecordingDisplay::new();
    let mut app = AppService::new();
    app.handle_event(water(21.3), &mut display);

    assert_eq!(display.calls.first(), Some(&DisplayCall::ClearFrame));
    assert_eq!(display.calls.last(), Some(&DisplayCall::FlushFrame));
    assert!(
        display.last_frame_has_content(),
        "DEFAULT screen must draw title and value"
    );
}

#[test]
fn every_screen_renders_without_panicking() {
    let mut app = AppService::new();
    let mut display = RecordingDisplay::new();
    for _ in 0..DisplayMode::ALL.len() {
        app.handle_event(Event::AdvanceDisplayMode, &mut display);
        assert!(
            display.last_frame_has_content(),
            "screen {:?} drew nothing",
            app.state().mode
        );
    }
}

#[test]
fn egg_screen_draws_the_bitmap() {
    let mut display = RecordingDisplay::new();
    let state = tankview::app::state::AppState {
        mode: DisplayMode::Egg,
        ..Default::default()
    };
    render(&mut display, &state);

    let lit: usize = display
        .since_last_clear()
        .iter()
        .filter_map(|c| match c {
            DisplayCall::Draw(n) => Some(*n),
            _ => None,
        })
        .sum();
    assert!(lit > 500, "egg bitmap should light a solid region, got {lit}");
}

// ── Secondary button one-off ──────────────────────────────────

#[test]
fn secondary_press_inverts_only_on_egg() {
    let mut app = AppService::new();
    let mut display = RecordingDisplay::new();

    // DEFAULT: diagnostic log only, no display effect, no render.
    app.handle_secondary_press(&mut display);
    assert!(display.calls.is_empty());
    assert!(!app.is_inverted());

    // Move to EGG (three presses of the primary button).
    for _ in 0..3 {
        app.handle_event(Event::AdvanceDisplayMode, &mut display);
    }
    assert_eq!(app.state().mode, DisplayMode::Egg);
    let flushes_before = display.flushes();

    // EGG: inversion toggles, bypassing the reaction policy entirely.
    app.handle_secondary_press(&mut display);
    assert_eq!(display.last_inversion(), Some(true));
    assert!(app.is_inverted());
    app.handle_secondary_press(&mut display);
    assert_eq!(display.last_inversion(), Some(false));
    assert_eq!(display.flushes(), flushes_before, "inversion must not redraw");
}

// ── Non-rendering events ──────────────────────────────────────

#[test]
fn hidden_readings_update_silently_and_appear_later() {
    let mut app = AppService::new();
    let mut display = RecordingDisplay::new();

    // Room readings arrive while DEFAULT is active: no renders.
    app.handle_event(
        Event::ReadingUpdated {
            sensor: SensorKind::RoomTemperature,
            value: 21.52,
        },
        &mut display,
    );
    app.handle_event(
        Event::ReadingUpdated {
            sensor: SensorKind::RoomHumidity,
            value: 40.16,
        },
        &mut display,
    );
    assert_eq!(display.flushes(), 0);

    // Switching to ROOM picks the values up lazily.
    app.handle_event(Event::AdvanceDisplayMode, &mut display);
    assert_eq!(app.state().mode, DisplayMode::Room);
    assert_eq!(room_line(app.state()), "21.5°c 40.2%");
    assert_eq!(display.flushes(), 1);
}
