//! A surface that keeps the draw calls instead of pixels.

use ambient_net_core::{Primitive, Rgb, Rgba, Surface};
use glam::DVec2;

/// Records every primitive in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    /// Last size passed to [`Surface::resize`].
    pub size: Option<(u32, u32)>,
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Draws the recorded primitives onto another surface.
    pub fn replay(&self, target: &mut dyn Surface) {
        for primitive in &self.primitives {
            primitive.draw(target);
        }
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn fill_background(&mut self, color: Rgb) {
        self.primitives.push(Primitive::Background(color));
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn circle(&mut self, center: DVec2, diameter: f64, color: Rgba) {
        self.primitives.push(Primitive::Circle {
            center,
            diameter,
            color,
        });
    }
}
