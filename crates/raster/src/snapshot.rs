//! PNG export of a [`PixelSurface`].
//!
//! Feature-gated behind `png` (default on) so that WASM builds can depend on
//! this crate without pulling in `image`.

use ambient_net_core::NetError;
use std::path::Path;

use crate::pixel::PixelSurface;

/// Writes the surface to `path` as an RGBA PNG.
///
/// Returns `NetError::Io` if the surface is empty or the write fails.
pub fn write_png(surface: &PixelSurface, path: &Path) -> Result<(), NetError> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(NetError::Io(format!(
            "cannot encode a {}x{} image",
            surface.width(),
            surface.height()
        )));
    }
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.data().to_vec())
        .ok_or_else(|| NetError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NetError::Io(e.to_string()))
}
