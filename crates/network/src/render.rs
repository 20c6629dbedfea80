//! Visual encoding of the network onto a [`Surface`].
//!
//! Links fade and thin out with distance, nodes grow sub-linearly with their
//! degree up to a cap, and nodes near the pointer get a translucent halo
//! drawn on top of everything else.

use ambient_net_core::{NetworkConfig, Rgb, Surface, Viewport};
use glam::DVec2;

use crate::graph::Edge;
use crate::node::Node;

/// Link opacity at distance 0 and at the link radius.
pub const EDGE_OPACITY: (f64, f64) = (180.0, 0.0);
/// Link stroke width at distance 0 and at the link radius.
pub const EDGE_WIDTH: (f64, f64) = (1.5, 0.4);
/// Opacity shared by every node.
pub const NODE_OPACITY: f64 = 180.0;
/// Most a node can grow beyond its base size, however many links it has.
pub const MAX_DEGREE_GROWTH: f64 = 4.0;
/// Halo diameter beyond the base node size, before closeness growth.
const HALO_SIZE_OFFSET: f64 = 2.0;
const HALO_MIN_GROWTH: f64 = 2.0;
const HALO_GROWTH_GAIN: f64 = 4.0;
const HALO_MIN_OPACITY: f64 = 60.0;
const HALO_OPACITY_GAIN: f64 = 80.0;

/// Linearly maps `value` from `[in_start, in_end]` onto `[out_start, out_end]`,
/// clamping the result to the output range.
///
/// A zero-width input domain maps everything below it to `out_start` and
/// everything at or beyond it to `out_end`. NaN maps to `out_end`.
pub fn map_clamped(value: f64, in_start: f64, in_end: f64, out_start: f64, out_end: f64) -> f64 {
    let span = in_end - in_start;
    let t = if span == 0.0 {
        if value < in_start {
            0.0
        } else {
            1.0
        }
    } else {
        (value - in_start) / span
    };
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    let (lo, hi) = if out_start <= out_end {
        (out_start, out_end)
    } else {
        (out_end, out_start)
    };
    (out_start + (out_end - out_start) * t).clamp(lo, hi)
}

/// Link opacity (0-255) for a link of length `distance`.
pub fn edge_opacity(distance: f64, link_radius: f64) -> f64 {
    map_clamped(distance, 0.0, link_radius, EDGE_OPACITY.0, EDGE_OPACITY.1)
}

/// Link stroke width for a link of length `distance`.
pub fn edge_width(distance: f64, link_radius: f64) -> f64 {
    map_clamped(distance, 0.0, link_radius, EDGE_WIDTH.0, EDGE_WIDTH.1)
}

/// Diameter of a node with `degree` links: never above `base + MAX_DEGREE_GROWTH`.
pub fn node_diameter(degree: usize, base: f64, gain: f64) -> f64 {
    base + ((degree as f64).sqrt() * gain).min(MAX_DEGREE_GROWTH)
}

/// Closeness of a node to the pointer: `1 - distance / hover_radius`, or
/// `None` when the node is not strictly inside the hover radius.
pub fn hover_closeness(distance: f64, hover_radius: f64) -> Option<f64> {
    (distance < hover_radius).then(|| 1.0 - distance / hover_radius)
}

/// Paints frames using the colors and sizes of a [`NetworkConfig`].
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Rgb,
    foreground: Rgb,
    halo: Rgb,
    link_radius: f64,
    base_node_size: f64,
    degree_size_gain: f64,
    hover_radius: f64,
}

impl Renderer {
    pub fn from_config(config: &NetworkConfig) -> Self {
        Self {
            background: config.background,
            foreground: config.foreground,
            halo: config.halo,
            link_radius: config.link_radius,
            base_node_size: config.base_node_size,
            degree_size_gain: config.degree_size_gain,
            hover_radius: config.hover_radius,
        }
    }

    pub fn draw_background(&self, surface: &mut dyn Surface) {
        surface.fill_background(self.background);
    }

    pub fn draw_edge(&self, surface: &mut dyn Surface, edge: &Edge) {
        let opacity = edge_opacity(edge.distance, self.link_radius);
        let width = edge_width(edge.distance, self.link_radius);
        surface.line(edge.from, edge.to, width, self.foreground.with_alpha(opacity));
    }

    pub fn draw_nodes(&self, surface: &mut dyn Surface, nodes: &[Node]) {
        let color = self.foreground.with_alpha(NODE_OPACITY);
        for node in nodes {
            let diameter = node_diameter(node.degree, self.base_node_size, self.degree_size_gain);
            surface.circle(node.position, diameter, color);
        }
    }

    /// Draws one halo per node strictly within the hover radius of `pointer`.
    ///
    /// Nothing is drawn when there is no pointer or it lies outside the
    /// viewport. Returns the number of halos drawn.
    pub fn draw_halos(
        &self,
        surface: &mut dyn Surface,
        nodes: &[Node],
        pointer: Option<DVec2>,
        viewport: &Viewport,
    ) -> usize {
        let Some(pointer) = pointer.filter(|p| viewport.contains(*p)) else {
            return 0;
        };
        let mut drawn = 0;
        for node in nodes {
            let Some(k) = hover_closeness(node.position.distance(pointer), self.hover_radius)
            else {
                continue;
            };
            let growth = HALO_MIN_GROWTH + k * HALO_GROWTH_GAIN;
            let diameter = self.base_node_size + HALO_SIZE_OFFSET + growth;
            let opacity = HALO_MIN_OPACITY + HALO_OPACITY_GAIN * k;
            surface.circle(node.position, diameter, self.halo.with_alpha(opacity));
            drawn += 1;
        }
        drawn
    }
}
