//! SSD1306 OLED adapter over the Linux I2C character device.
//!
//! Wraps the `ssd1306` driver in buffered-graphics mode and implements
//! [`DisplayPort`] for it. Transport failures are logged here, not
//! propagated — a dropped frame heals on the next render, and losing
//! the display must never take down the monitoring loop.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;
use linux_embedded_hal::I2cdev;
use log::{error, warn};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::app::ports::DisplayPort;
use crate::config::AppConfig;
use crate::error::{Error, Result};

type Inner =
    Ssd1306<I2CInterface<I2cdev>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The physical 128x64 panel. Owns the I2C bus handle exclusively;
/// dropping this value closes the bus.
pub struct Oled {
    inner: Inner,
}

/// Open the I2C bus and bring the panel up blank.
pub fn open(config: &AppConfig) -> Result<Oled> {
    let i2c = I2cdev::new(&config.i2c_bus).map_err(|e| {
        error!("open {} failed: {e}", config.i2c_bus);
        Error::Init("open i2c bus")
    })?;

    let interface = I2CDisplayInterface::new_custom_address(i2c, config.display_address);
    let mut inner = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    inner.init().map_err(|e| {
        error!("display init failed: {e:?}");
        Error::Init("display init")
    })?;
    inner.clear_buffer();
    let _ = inner.flush();

    Ok(Oled { inner })
}

impl OriginDimensions for Oled {
    fn size(&self) -> Size {
        self.inner.size()
    }
}

impl DrawTarget for Oled {
    type Color = BinaryColor;
    type Error = <Inner as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> std::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.inner.draw_iter(pixels)
    }
}

impl DisplayPort for Oled {
    fn clear_frame(&mut self) {
        self.inner.clear_buffer();
    }

    fn flush_frame(&mut self) {
        if let Err(e) = self.inner.flush() {
            warn!("frame flush failed: {e:?}");
        }
    }

    fn set_inverted(&mut self, inverted: bool) {
        if let Err(e) = self.inner.set_invert(inverted) {
            warn!("invert({inverted}) failed: {e:?}");
        }
    }

    fn power_off(&mut self) {
        if let Err(e) = self.inner.set_display_on(false) {
            warn!("display power-off failed: {e:?}");
        }
    }
}
