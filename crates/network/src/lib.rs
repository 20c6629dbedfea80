#![deny(unsafe_code)]
//! Ambient network: drifting nodes linked by proximity.
//!
//! Nodes wander over the canvas following a smooth noise field. Each frame
//! every pair closer than the link radius is joined by a line that fades with
//! distance, nodes grow with their number of links, and nodes near the
//! pointer light up with a halo.
//!
//! [`AmbientNetwork`] owns all per-run state. A host calls
//! [`AmbientNetwork::frame`] once per animation tick with the elapsed time and
//! a [`Surface`]; the frame advances the nodes, rebuilds the proximity graph
//! and paints the result in one synchronous pass.

pub mod controller;
pub mod graph;
pub mod node;
pub mod render;

use ambient_net_core::{
    NetError, NetworkConfig, NoiseField, PerlinNoise, Surface, Viewport, Xorshift64,
};
use glam::DVec2;
use serde::Serialize;
use serde_json::Value;

pub use controller::{ResizeOutcome, ViewportController};
pub use graph::Edge;
pub use node::{Drift, Node, NodeSet};
pub use render::Renderer;

/// Upper bound of the random time phase added to every noise sample.
const TIME_PHASE_RANGE: f64 = 1000.0;

/// Summary of one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrameStats {
    pub edges: usize,
    pub halos: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

/// The complete simulation state of one canvas.
pub struct AmbientNetwork {
    config: NetworkConfig,
    controller: ViewportController,
    nodes: NodeSet,
    noise: Box<dyn NoiseField>,
    drift: Drift,
    renderer: Renderer,
    rng: Xorshift64,
    time_phase: f64,
    pointer: Option<DVec2>,
    frames: u64,
}

impl AmbientNetwork {
    /// Creates a network with Perlin drift noise seeded from `seed`.
    ///
    /// Returns an error if the config does not validate.
    pub fn new(config: NetworkConfig, viewport: Viewport, seed: u64) -> Result<Self, NetError> {
        let mut rng = Xorshift64::new(seed);
        let noise = PerlinNoise::with_octaves(
            rng.next_u32(),
            config.noise_octaves,
            PerlinNoise::DEFAULT_PERSISTENCE,
            PerlinNoise::DEFAULT_LACUNARITY,
        );
        Self::build(config, viewport, rng, Box::new(noise))
    }

    /// Creates a network that drifts according to the given noise field.
    pub fn with_noise(
        config: NetworkConfig,
        viewport: Viewport,
        seed: u64,
        noise: Box<dyn NoiseField>,
    ) -> Result<Self, NetError> {
        Self::build(config, viewport, Xorshift64::new(seed), noise)
    }

    /// Creates a network from a partial JSON config object.
    pub fn from_json(viewport: Viewport, seed: u64, params: &Value) -> Result<Self, NetError> {
        Self::new(NetworkConfig::from_json(params)?, viewport, seed)
    }

    fn build(
        config: NetworkConfig,
        viewport: Viewport,
        mut rng: Xorshift64,
        noise: Box<dyn NoiseField>,
    ) -> Result<Self, NetError> {
        config.validate()?;
        let time_phase = rng.next_range(0.0, TIME_PHASE_RANGE);
        let nodes = NodeSet::initialize(config.node_count, &viewport, &mut rng);
        log::debug!(
            "initialized {} nodes on {}x{} (time phase {time_phase:.3})",
            nodes.len(),
            viewport.width(),
            viewport.height()
        );
        Ok(Self {
            controller: ViewportController::new(viewport, config.resize_policy),
            drift: Drift::from_config(&config),
            renderer: Renderer::from_config(&config),
            config,
            nodes,
            noise,
            rng,
            time_phase,
            pointer: None,
            frames: 0,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.controller.viewport()
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Sets the pointer position relative to the canvas, or `None` when the
    /// pointer has left it.
    pub fn set_pointer(&mut self, pointer: Option<DVec2>) {
        self.pointer = pointer;
    }

    /// Noise time for a given elapsed wall time.
    pub fn noise_time(&self, elapsed_ms: f64) -> f64 {
        elapsed_ms * self.config.noise_time_scale + self.time_phase
    }

    /// Moves every node one step along the noise field at `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: f64) {
        let viewport = self.controller.viewport();
        let time = self.noise_time(elapsed_ms);
        self.nodes
            .advance(&viewport, self.noise.as_ref(), self.drift, time);
    }

    /// Recomputes the proximity graph for the current positions.
    pub fn edges(&mut self) -> Vec<Edge> {
        graph::build(self.nodes.as_mut_slice(), self.config.link_radius)
    }

    /// Runs one full frame: advance, link, paint.
    pub fn frame(&mut self, elapsed_ms: f64, surface: &mut dyn Surface) -> FrameStats {
        self.advance(elapsed_ms);
        let viewport = self.controller.viewport();

        self.renderer.draw_background(surface);
        let renderer = &self.renderer;
        let edges = graph::for_each_edge(
            self.nodes.as_mut_slice(),
            self.config.link_radius,
            |edge| renderer.draw_edge(surface, &edge),
        );
        let nodes = self.nodes.as_slice();
        renderer.draw_nodes(surface, nodes);
        let halos = renderer.draw_halos(surface, nodes, self.pointer, &viewport);

        self.frames += 1;
        let stats = FrameStats {
            edges,
            halos,
            max_degree: nodes.iter().map(|n| n.degree).max().unwrap_or(0),
            mean_degree: if nodes.is_empty() {
                0.0
            } else {
                (2 * edges) as f64 / nodes.len() as f64
            },
        };
        log::trace!("frame {} at {elapsed_ms:.1}ms: {stats:?}", self.frames);
        stats
    }

    /// Handles a window resize: resizes the surface and the clamp bounds.
    pub fn resize(&mut self, window_width: f64, surface: &mut dyn Surface) -> ResizeOutcome {
        let outcome = self.controller.on_window_resize(window_width);
        self.apply_resize(outcome, surface);
        outcome
    }

    /// Like [`resize`](Self::resize), but with explicit dimensions.
    pub fn resize_to(&mut self, viewport: Viewport, surface: &mut dyn Surface) -> ResizeOutcome {
        let outcome = self.controller.set_viewport(viewport);
        self.apply_resize(outcome, surface);
        outcome
    }

    fn apply_resize(&mut self, outcome: ResizeOutcome, surface: &mut dyn Surface) {
        let (w, h) = outcome.viewport.pixel_size();
        surface.resize(w, h);
        if outcome.reinitialize {
            self.nodes.reinitialize(&outcome.viewport, &mut self.rng);
        }
        if outcome.changed {
            log::debug!(
                "resized to {}x{} ({})",
                outcome.viewport.width(),
                outcome.viewport.height(),
                if outcome.reinitialize {
                    "nodes reinitialized"
                } else {
                    "positions preserved"
                }
            );
        }
    }
}
