//! Browser binding: drives an [`AmbientNetwork`] on an HTML canvas.
//!
//! The host page owns the animation loop. It constructs an [`AmbientCanvas`],
//! calls [`AmbientCanvas::frame`] from `requestAnimationFrame`, and forwards
//! pointer and window resize events.

mod canvas;

use ambient_net::AmbientNetwork;
use ambient_net_core::{DVec2, NetError, Surface, Viewport};
use log::Level;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use canvas::CanvasSurface;

/// Installs the console logger and panic hook.
#[wasm_bindgen(start)]
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("ambient network ready");
}

fn to_js(err: NetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct AmbientCanvas {
    network: AmbientNetwork,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl AmbientCanvas {
    /// Sizes `canvas` from the window width and seeds a new network.
    ///
    /// `params_json` is a partial parameter object; pass `"{}"` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        window_width: f64,
        seed: u64,
        params_json: &str,
    ) -> Result<AmbientCanvas, JsValue> {
        let params: serde_json::Value = serde_json::from_str(params_json)
            .map_err(|e| JsValue::from_str(&format!("invalid params JSON: {e}")))?;
        let viewport = Viewport::from_window_width(window_width);
        let network = AmbientNetwork::from_json(viewport, seed, &params).map_err(to_js)?;
        let mut surface = CanvasSurface::new(canvas)?;
        let (w, h) = viewport.pixel_size();
        surface.resize(w, h);
        Ok(Self { network, surface })
    }

    /// Renders one frame; returns the number of links drawn.
    pub fn frame(&mut self, elapsed_ms: f64) -> usize {
        self.network.frame(elapsed_ms, &mut self.surface).edges
    }

    /// Pointer position in canvas coordinates.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.network.set_pointer(Some(DVec2::new(x, y)));
    }

    pub fn clear_pointer(&mut self) {
        self.network.set_pointer(None);
    }

    /// Returns `true` when the canvas size changed.
    pub fn resize(&mut self, window_width: f64) -> bool {
        self.network.resize(window_width, &mut self.surface).changed
    }

    pub fn width(&self) -> f64 {
        self.network.viewport().width()
    }

    pub fn height(&self) -> f64 {
        self.network.viewport().height()
    }
}
