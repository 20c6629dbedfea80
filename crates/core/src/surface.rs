//! The drawing surface every frame is painted onto.
//!
//! The trait is object-safe so hosts can hand the renderer a
//! `&mut dyn Surface`, whether it is a browser canvas, a CPU pixel buffer or
//! a recorder used in tests.

use glam::DVec2;

use crate::color::{Rgb, Rgba};

/// A 2D drawing surface accepting the three primitives a frame is made of.
///
/// Coordinates are device-independent pixels with the origin at the top
/// left. Circle sizes are diameters.
pub trait Surface {
    /// Resize the backing store. Called by the viewport controller on resize.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the whole surface with an opaque color.
    fn fill_background(&mut self, color: Rgb);

    /// Stroke a straight line segment.
    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);

    /// Fill a circle centered at `center` with the given diameter.
    fn circle(&mut self, center: DVec2, diameter: f64, color: Rgba);
}

/// One drawing operation, as recorded by hosts that buffer a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Background(Rgb),
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Rgba,
    },
    Circle {
        center: DVec2,
        diameter: f64,
        color: Rgba,
    },
}

impl Primitive {
    /// Replays this primitive onto a surface.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match *self {
            Primitive::Background(color) => surface.fill_background(color),
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => surface.line(from, to, width, color),
            Primitive::Circle {
                center,
                diameter,
                color,
            } => surface.circle(center, diameter, color),
        }
    }
}
