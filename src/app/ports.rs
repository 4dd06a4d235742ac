//! Port traits — the boundary between the application core and hardware.
//!
//! ```text
//!   Adapter (SSD1306 / test mock) ──▶ DisplayPort ──▶ AppService
//! ```
//!
//! The display adapter implements [`DisplayPort`]; the service and
//! renderer consume it via generics, so the core never names a concrete
//! device and the full pipeline runs under host tests.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

/// The one hardware surface the application writes to.
///
/// Drawing goes through the [`DrawTarget`] supertrait (the renderer
/// composes frames with `embedded-graphics` primitives); the extra
/// methods cover the device operations that have no drawing analogue.
/// Adapters are expected to log their own transport failures — the
/// core treats every display operation as fire-and-forget.
pub trait DisplayPort: DrawTarget<Color = BinaryColor> {
    /// Blank the frame buffer. Called before every redraw; the device
    /// has no partial-redraw primitive in use.
    fn clear_frame(&mut self);

    /// Push the composed frame to the physical device.
    fn flush_frame(&mut self);

    /// Set colour inversion (the EGG screen's one-shot visual effect).
    fn set_inverted(&mut self, inverted: bool);

    /// Power the panel down. Last display operation before the bus
    /// handle is released.
    fn power_off(&mut self);
}
