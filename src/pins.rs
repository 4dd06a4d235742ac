//! Fixed hardware wiring for the appliance.
//!
//! These match the physical build: the OLED hangs off the primary I2C
//! bus, the two buttons are wired to 3V3 through momentary switches
//! (rising edge on press), and the DS18B20 probe sits on the kernel
//! one-wire bus.

/// BCM pin of the mode-advance button.
pub const BUTTON_PRIMARY_GPIO: u8 = 17;

/// BCM pin of the secondary (diagnostic) button.
pub const BUTTON_SECONDARY_GPIO: u8 = 27;

/// I2C character device the display is attached to.
pub const I2C_BUS: &str = "/dev/i2c-1";

/// 7-bit I2C address of the SSD1306 controller.
pub const DISPLAY_ADDR: u8 = 0x3C;

/// Sysfs directory where the w1 kernel driver exposes slave devices.
pub const W1_DEVICES_DIR: &str = "/sys/bus/w1/devices";
