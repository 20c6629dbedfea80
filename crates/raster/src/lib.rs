//! CPU surfaces for the ambient network.
//!
//! [`PixelSurface`] rasterizes primitives into an RGBA8 buffer,
//! [`RecordingSurface`] keeps them as a list, and (with the `png` feature)
//! [`snapshot::write_png`] saves a buffer to disk.

pub mod pixel;
pub mod recorder;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::PixelSurface;
pub use recorder::RecordingSurface;
