//! Canvas dimensions and the sizing policy derived from the window.
//!
//! The canvas width follows the window width up to [`MAX_WIDTH`]; the height
//! is derived from a fixed [`ASPECT_RATIO`] and rounded to whole pixels.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::NetError;

/// Upper bound on the canvas width in device-independent pixels.
pub const MAX_WIDTH: f64 = 980.0;

/// Height as a fraction of width.
pub const ASPECT_RATIO: f64 = 0.45;

/// Canvas dimensions in device-independent pixels.
///
/// Node positions always satisfy `0 <= x <= width` and `0 <= y <= height`
/// after an advance; a zero-sized viewport pins every node to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport of explicit size.
    ///
    /// Returns `NetError::InvalidDimensions` if either side is negative or
    /// not finite.
    pub fn new(width: f64, height: f64) -> Result<Self, NetError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(NetError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Derives the viewport for a window of the given width.
    pub fn from_window_width(window_width: f64) -> Self {
        let (width, height) = compute_size(window_width);
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Size rounded up to whole pixels, for allocating backing stores.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }

    /// Whether `point` lies inside the canvas, edges included.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }

    /// Clamps `point` into `[0, width] x [0, height]`.
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            clamp_axis(point.x, self.width),
            clamp_axis(point.y, self.height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_window_width(MAX_WIDTH)
    }
}

/// Applies the width cap and aspect ratio to a window width.
///
/// Negative or NaN widths collapse to a zero-sized canvas.
pub fn compute_size(window_width: f64) -> (f64, f64) {
    let width = if window_width.is_nan() {
        0.0
    } else {
        window_width.clamp(0.0, MAX_WIDTH)
    };
    (width, (width * ASPECT_RATIO).round())
}

fn clamp_axis(v: f64, max: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, max)
}
