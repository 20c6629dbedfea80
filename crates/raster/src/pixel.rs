//! Software rasterization of network primitives into an RGBA8 buffer.
//!
//! Always available (no feature gate) so the PNG snapshot path and any
//! `ImageData` consumer share the same pixels. Shapes are anti-aliased by
//! coverage: each pixel centre is tested against the shape's distance field
//! and blended source-over with the stroke alpha scaled by coverage.

use ambient_net_core::{Rgb, Rgba, Surface};
use glam::DVec2;

/// An opaque RGBA8 canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Creates a black surface of `width x height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: blank(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Colour at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f64) {
        let a = color.alpha_fraction() * coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let i = self.index(x, y);
        for (offset, src) in [color.r, color.g, color.b].into_iter().enumerate() {
            let dst = f64::from(self.data[i + offset]);
            self.data[i + offset] = (f64::from(src) * a + dst * (1.0 - a)).round() as u8;
        }
        self.data[i + 3] = 255;
    }

    /// Pixel rectangle `[x0, x1) x [y0, y1)` covering the box around `lo..hi`,
    /// clipped to the surface. `None` when nothing is left.
    fn clip(&self, lo: DVec2, hi: DVec2) -> Option<(u32, u32, u32, u32)> {
        if !(lo.is_finite() && hi.is_finite()) {
            return None;
        }
        let x0 = lo.x.floor().max(0.0);
        let y0 = lo.y.floor().max(0.0);
        let x1 = hi.x.ceil().min(f64::from(self.width));
        let y1 = hi.y.ceil().min(f64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Blends `color` over every pixel whose centre lies within `reach` of
    /// the shape, using `coverage` to weigh the distance.
    fn fill_by_distance(
        &mut self,
        lo: DVec2,
        hi: DVec2,
        color: Rgba,
        coverage: impl Fn(DVec2) -> f64,
    ) {
        let Some((x0, y0, x1, y1)) = self.clip(lo, hi) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let c = coverage(centre);
                if c > 0.0 {
                    self.blend(x, y, color, c);
                }
            }
        }
    }
}

impl Surface for PixelSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = blank(width, height);
    }

    fn fill_background(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        if width.is_nan() || width <= 0.0 {
            return;
        }
        // Sub-pixel strokes keep a one-pixel footprint and fade instead.
        let half = (width * 0.5).max(0.5);
        let fade = width.min(1.0);
        let reach = DVec2::splat(half + 1.0);
        self.fill_by_distance(from.min(to) - reach, from.max(to) + reach, color, |p| {
            let d = distance_to_segment(p, from, to);
            (half + 0.5 - d).clamp(0.0, 1.0) * fade
        });
    }

    fn circle(&mut self, center: DVec2, diameter: f64, color: Rgba) {
        if diameter.is_nan() || diameter <= 0.0 {
            return;
        }
        let radius = (diameter * 0.5).max(0.5);
        let fade = diameter.min(1.0).powi(2);
        let reach = DVec2::splat(radius + 1.0);
        self.fill_by_distance(center - reach, center + reach, color, |p| {
            (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0) * fade
        });
    }
}

fn blank(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for px in data.chunks_exact_mut(4) {
        px[3] = 255;
    }
    data
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::new(15, 17, 22);
    const FG: Rgb = Rgb::new(220, 224, 235);

    fn surface(w: u32, h: u32) -> PixelSurface {
        let mut s = PixelSurface::new(w, h);
        s.fill_background(BG);
        s
    }

    #[test]
    fn buffer_has_four_bytes_per_pixel() {
        let s = PixelSurface::new(8, 4);
        assert_eq!(s.data().len(), 8 * 4 * 4);
        assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn background_fills_every_pixel() {
        let s = surface(5, 3);
        for px in s.data().chunks_exact(4) {
            assert_eq!(px, &[15, 17, 22, 255]);
        }
    }

    #[test]
    fn resize_reallocates() {
        let mut s = surface(4, 4);
        s.resize(10, 2);
        assert_eq!((s.width(), s.height()), (10, 2));
        assert_eq!(s.data().len(), 10 * 2 * 4);
        assert!(s.pixel(9, 1).is_some());
        assert!(s.pixel(10, 1).is_none());
    }

    #[test]
    fn opaque_disc_covers_its_centre() {
        let mut s = surface(20, 20);
        s.circle(DVec2::new(10.0, 10.0), 8.0, FG.opaque());
        assert_eq!(s.pixel(10, 10), Some([220, 224, 235, 255]));
        assert_eq!(s.pixel(0, 0), Some([15, 17, 22, 255]));
    }

    #[test]
    fn translucent_disc_blends_with_background() {
        let mut s = surface(20, 20);
        s.circle(DVec2::new(10.0, 10.0), 8.0, FG.with_alpha(127.5));
        let [r, g, b, a] = s.pixel(10, 10).unwrap();
        assert_eq!(a, 255);
        assert!(r > 15 && r < 220, "r = {r}");
        assert!(g > 17 && g < 224);
        assert!(b > 22 && b < 235);
    }

    #[test]
    fn zero_alpha_draws_nothing() {
        let mut s = surface(20, 20);
        let before = s.clone();
        s.line(DVec2::new(0.0, 10.0), DVec2::new(20.0, 10.0), 1.5, FG.with_alpha(0.0));
        s.circle(DVec2::new(10.0, 10.0), 6.0, FG.with_alpha(0.0));
        assert_eq!(s, before);
    }

    #[test]
    fn horizontal_line_touches_its_row_only() {
        let mut s = surface(20, 20);
        s.line(DVec2::new(2.0, 10.5), DVec2::new(18.0, 10.5), 1.5, FG.opaque());
        assert_ne!(s.pixel(10, 10), Some([15, 17, 22, 255]));
        assert_eq!(s.pixel(10, 3), Some([15, 17, 22, 255]));
        assert_eq!(s.pixel(10, 17), Some([15, 17, 22, 255]));
    }

    #[test]
    fn degenerate_and_offscreen_shapes_are_ignored() {
        let mut s = surface(10, 10);
        let before = s.clone();
        s.line(DVec2::ZERO, DVec2::new(5.0, 5.0), 0.0, FG.opaque());
        s.circle(DVec2::new(5.0, 5.0), 0.0, FG.opaque());
        s.circle(DVec2::new(-50.0, -50.0), 4.0, FG.opaque());
        s.circle(DVec2::new(f64::NAN, 5.0), 4.0, FG.opaque());
        assert_eq!(s, before);
    }

    #[test]
    fn empty_surface_accepts_drawing() {
        let mut s = PixelSurface::new(0, 0);
        s.fill_background(BG);
        s.circle(DVec2::ZERO, 5.0, FG.opaque());
        assert!(s.data().is_empty());
    }

    #[test]
    fn segment_distance() {
        let a = DVec2::ZERO;
        let b = DVec2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(DVec2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(DVec2::new(-4.0, 3.0), a, b), 5.0);
        assert_eq!(distance_to_segment(DVec2::new(1.0, 1.0), a, a), 2f64.sqrt());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn drawing_keeps_pixels_opaque(
                x0 in -20.0_f64..60.0, y0 in -20.0_f64..60.0,
                x1 in -20.0_f64..60.0, y1 in -20.0_f64..60.0,
                width in 0.0_f64..3.0,
                alpha in 0.0_f64..255.0,
            ) {
                let mut s = surface(40, 30);
                s.line(DVec2::new(x0, y0), DVec2::new(x1, y1), width, FG.with_alpha(alpha));
                s.circle(DVec2::new(x1, y1), width * 3.0, FG.with_alpha(alpha));
                prop_assert_eq!(s.data().len(), 40 * 30 * 4);
                for px in s.data().chunks_exact(4) {
                    prop_assert_eq!(px[3], 255);
                    prop_assert!(px[0] >= 15 && px[0] <= 220);
                }
            }
        }
    }
}
