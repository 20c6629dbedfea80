//! Proximity graph: links between nodes closer than a fixed radius.
//!
//! Every unordered pair is tested each frame, so the cost is quadratic in the
//! node count. That is fine for tens to low hundreds of nodes; past that a
//! spatial grid could replace the pair scan without changing which edges or
//! degrees come out.

use glam::DVec2;

use crate::node::Node;

/// A link between nodes `a < b` for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub from: DVec2,
    pub to: DVec2,
    pub distance: f64,
}

/// Visits every edge of the proximity graph and recomputes node degrees.
///
/// Pairs are tested in lexicographic `(a, b)` order and an edge exists iff
/// the distance is strictly below `link_radius`. Degrees are zeroed first,
/// so nothing carries over from earlier frames. `visit` sees each edge as soon
/// as it is found, letting the renderer draw without collecting the edge list.
pub fn for_each_edge(nodes: &mut [Node], link_radius: f64, mut visit: impl FnMut(Edge)) -> usize {
    for node in nodes.iter_mut() {
        node.degree = 0;
    }
    let mut count = 0;
    for a in 0..nodes.len() {
        let from = nodes[a].position;
        for b in (a + 1)..nodes.len() {
            let to = nodes[b].position;
            let distance = from.distance(to);
            if distance < link_radius {
                nodes[a].degree += 1;
                nodes[b].degree += 1;
                count += 1;
                visit(Edge {
                    a,
                    b,
                    from,
                    to,
                    distance,
                });
            }
        }
    }
    count
}

/// Builds the full edge list for the current positions, updating degrees.
pub fn build(nodes: &mut [Node], link_radius: f64) -> Vec<Edge> {
    let mut edges = Vec::new();
    for_each_edge(nodes, link_radius, |edge| edges.push(edge));
    edges
}
