//! GPIO button adapter: two edge-triggered inputs.
//!
//! Each line is configured input/rising-edge with a driver-level
//! debounce window. The interrupt callbacks only enqueue — all state
//! access happens in the dispatcher loop, so no locking is needed
//! here.

use std::time::Duration;

use log::info;
use rppal::gpio::{Gpio, InputPin, Trigger};

use crate::config::AppConfig;
use crate::error::{InputError, Result};
use crate::events::{Event, EventTx};

/// Claimed button lines; dropping (or [`release`](Buttons::release))
/// unregisters the interrupts and frees the pins.
pub struct Buttons {
    primary: InputPin,
    secondary: InputPin,
}

/// Claim both buttons and register their edge watches.
pub fn watch(config: &AppConfig, tx: &EventTx) -> Result<Buttons> {
    let gpio = Gpio::new().map_err(|_| InputError::PinUnavailable(config.primary_button_gpio))?;
    let debounce = Duration::from_millis(config.debounce_ms);

    let primary = watch_pin(
        &gpio,
        config.primary_button_gpio,
        debounce,
        tx.clone(),
        Event::AdvanceDisplayMode,
    )?;
    let secondary = watch_pin(
        &gpio,
        config.secondary_button_gpio,
        debounce,
        tx.clone(),
        Event::SecondaryPressed,
    )?;

    info!(
        "buttons armed on GPIO {} (primary) and GPIO {} (secondary)",
        config.primary_button_gpio, config.secondary_button_gpio
    );
    Ok(Buttons { primary, secondary })
}

fn watch_pin(
    gpio: &Gpio,
    pin: u8,
    debounce: Duration,
    tx: EventTx,
    event: Event,
) -> Result<InputPin> {
    let mut input = gpio
        .get(pin)
        .map_err(|_| InputError::PinUnavailable(pin))?
        .into_input_pulldown();

    input
        .set_async_interrupt(Trigger::RisingEdge, Some(debounce), move |_| {
            tx.push(event.clone());
        })
        .map_err(|_| InputError::WatchFailed(pin))?;

    Ok(input)
}

impl Buttons {
    /// Unregister both edge watches and release the lines.
    pub fn release(mut self) {
        let _ = self.primary.clear_async_interrupt();
        let _ = self.secondary.clear_async_interrupt();
        info!("input lines released");
    }
}
