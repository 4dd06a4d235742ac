//! Bundled image assets for the display.

use embedded_graphics::pixelcolor::BinaryColor;
use tinybmp::Bmp;

use crate::error::{Error, Result};

/// The EGG screen bitmap, compiled into the binary (1-bpp BMP, 64x64).
pub const EGG_BMP: &[u8] = include_bytes!("../../assets/egg.bmp");

/// Decode the EGG bitmap. Called once per render of the EGG screen;
/// the slice is static but the parse can still fail if the bundled
/// asset is ever replaced with a corrupt file.
pub fn egg() -> Result<Bmp<'static, BinaryColor>> {
    decode(EGG_BMP, "egg.bmp")
}

fn decode<'a>(bytes: &'a [u8], name: &'static str) -> Result<Bmp<'a, BinaryColor>> {
    Bmp::from_slice(bytes).map_err(|_| Error::AssetDecode(name))
}
