//! [`Surface`] backed by a 2D canvas context.

use std::f64::consts::TAU;

use ambient_net_core::{DVec2, Rgb, Rgba, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_background(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&css_rgb(color));
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: DVec2, diameter: f64, color: Rgba) {
        if diameter.is_nan() || diameter <= 0.0 {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, diameter * 0.5, 0.0, TAU);
        self.ctx.fill();
    }
}

fn css_rgb(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}
