//! System configuration parameters
//!
//! All tunable parameters for the tankview appliance. There is no
//! runtime configuration surface (no CLI, no config file); values are
//! fixed at build time and collected here so tests and the binary share
//! one source of truth.

use crate::pins;

/// Core system configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    // --- Timing ---
    /// Water sensor poll interval (milliseconds)
    pub poll_interval_ms: u64,
    /// Driver-level button debounce window (milliseconds)
    pub debounce_ms: u64,

    // --- Event dispatch ---
    /// Bounded capacity of the dispatcher event queue
    pub event_queue_capacity: usize,

    // --- Display ---
    /// I2C character device path
    pub i2c_bus: String,
    /// 7-bit I2C address of the SSD1306
    pub display_address: u8,

    // --- Inputs ---
    /// BCM pin of the mode-advance button
    pub primary_button_gpio: u8,
    /// BCM pin of the secondary (diagnostic) button
    pub secondary_button_gpio: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_interval_ms: 1000, // 1 Hz sensor poll
            debounce_ms: 10,

            // Event dispatch
            event_queue_capacity: 32,

            // Display
            i2c_bus: pins::I2C_BUS.to_string(),
            display_address: pins::DISPLAY_ADDR,

            // Inputs
            primary_button_gpio: pins::BUTTON_PRIMARY_GPIO,
            secondary_button_gpio: pins::BUTTON_SECONDARY_GPIO,
        }
    }
}
