//! Node state and noise-driven drift.
//!
//! Each node carries two fixed seeds, one per axis, that offset where it reads
//! the shared noise field. Nodes therefore follow distinct trajectories while
//! sampling the same underlying field.

use ambient_net_core::{NetworkConfig, NoiseField, Viewport, Xorshift64};
use glam::DVec2;

/// Time offset between the x and y drift samples.
pub const Y_TIME_OFFSET: f64 = 1234.0;

/// Per-axis noise seeds are drawn from `[0, SEED_RANGE)`.
pub const SEED_RANGE: f64 = 1000.0;

/// A drifting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Current position; inside the viewport after every advance.
    pub position: DVec2,
    seed: DVec2,
    /// Links incident to this node in the current frame.
    pub degree: usize,
}

impl Node {
    /// Creates a node with explicit noise seeds (`seed.x` for the x axis).
    pub fn new(position: DVec2, seed: DVec2) -> Self {
        Self {
            position,
            seed,
            degree: 0,
        }
    }

    pub fn seed(&self) -> DVec2 {
        self.seed
    }
}

/// Amplitude and spatial frequency of the drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub strength: f64,
    pub spatial_scale: f64,
}

impl Drift {
    pub fn from_config(config: &NetworkConfig) -> Self {
        Self {
            strength: config.drift_strength,
            spatial_scale: config.noise_scale,
        }
    }

    /// Displacement for a node at noise time `time`.
    ///
    /// Each component lies in `[-strength / 2, strength / 2)`.
    pub fn displacement(&self, node: &Node, noise: &dyn NoiseField, time: f64) -> DVec2 {
        let sx = noise.sample(node.seed.x + node.position.x * self.spatial_scale, time);
        let sy = noise.sample(
            node.seed.y + node.position.y * self.spatial_scale,
            time + Y_TIME_OFFSET,
        );
        DVec2::new((sx - 0.5) * self.strength, (sy - 0.5) * self.strength)
    }
}

/// The fixed population of nodes.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    nodes: Vec<Node>,
}

impl NodeSet {
    /// Scatters `count` nodes uniformly over the viewport with fresh seeds.
    pub fn initialize(count: usize, viewport: &Viewport, rng: &mut Xorshift64) -> Self {
        let nodes = (0..count)
            .map(|_| {
                let position = random_position(viewport, rng);
                let seed = DVec2::new(
                    rng.next_range(0.0, SEED_RANGE),
                    rng.next_range(0.0, SEED_RANGE),
                );
                Node::new(position, seed)
            })
            .collect();
        Self { nodes }
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Moves every node by its drift, clamps it into the viewport and
    /// clears its degree for the graph pass that follows.
    pub fn advance(&mut self, viewport: &Viewport, noise: &dyn NoiseField, drift: Drift, time: f64) {
        for node in &mut self.nodes {
            let step = drift.displacement(node, noise, time);
            node.position = viewport.clamp(node.position + step);
            node.degree = 0;
        }
    }

    /// Scatters existing nodes across `viewport` again. Seeds are kept.
    pub fn reinitialize(&mut self, viewport: &Viewport, rng: &mut Xorshift64) {
        for node in &mut self.nodes {
            node.position = random_position(viewport, rng);
            node.degree = 0;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    pub fn as_mut_slice(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

fn random_position(viewport: &Viewport, rng: &mut Xorshift64) -> DVec2 {
    DVec2::new(
        rng.next_range(0.0, viewport.width()),
        rng.next_range(0.0, viewport.height()),
    )
}
