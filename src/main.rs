//! tankview — Main Entry Point
//!
//! Event-driven wiring:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────────────┐
//! │ Poller thread│───▶│              │    │  Dispatcher loop      │
//! │ GPIO edges   │───▶│  Event queue │───▶│  apply → policy →     │
//! │ Signal       │───▶│  (bounded)   │    │  render (AppService)  │
//! └──────────────┘    └──────────────┘    └───────────────────────┘
//! ```
//!
//! Producers only enqueue; the dispatcher is the single consumer and
//! handles each event to completion, so renders never interleave and
//! no snapshot is observed mid-update.

use anyhow::Result;
use log::info;

use tankview::app::ports::DisplayPort;
use tankview::app::service::AppService;
use tankview::config::AppConfig;
use tankview::drivers::{buttons, display};
use tankview::events::{event_queue, Event};
use tankview::sensors;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("tankview v{}", env!("CARGO_PKG_VERSION"));
    let config = AppConfig::default();

    // ── Peripherals ───────────────────────────────────────────
    let mut oled = display::open(&config)?;
    let (tx, rx) = event_queue(config.event_queue_capacity);

    let poller = sensors::spawn_poller(&config, tx.clone())?;
    let inputs = buttons::watch(&config, &tx)?;

    // Termination signal requests a clean exit through the queue like
    // any other producer.
    let signal_tx = tx.clone();
    ctrlc::set_handler(move || {
        signal_tx.push(Event::Shutdown);
    })?;

    // ── Dispatch loop ─────────────────────────────────────────
    let mut app = AppService::new();
    info!("system ready, entering dispatch loop");

    for event in &rx {
        match event {
            Event::Shutdown => break,
            // Documented one-off: acts on the display directly,
            // without going through store or policy.
            Event::SecondaryPressed => app.handle_secondary_press(&mut oled),
            event => app.handle_event(event, &mut oled),
        }
    }

    // ── Shutdown sequence ─────────────────────────────────────
    // Order matters: stop producers first, then power the panel down,
    // then drop the display (which closes the bus handle) so nothing
    // can write to a half-closed bus.
    info!("termination signal received, shutting down");
    inputs.release();
    poller.stop();
    oled.power_off();
    drop(oled);

    info!("shutdown complete");
    Ok(())
}
