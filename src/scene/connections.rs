//! Proximity connection graph among surface nodes.

use crate::color::Rgb;
use crate::config::ConnectionMode;
use crate::geom::Point3;
use crate::scene::nodes::SurfaceNode;

/// Default alignment tolerance for peer connections, in sphere-radius units.
///
/// The tolerance is absolute: raising sampling resolution packs nodes closer
/// together and admits more pairs. Callers that want predicate behavior
/// independent of sampling density can scale it through
/// [`PeerConnectionOptions::tolerance`].
pub const PROXIMITY_TOLERANCE: f64 = 0.1;

/// Options for the peer connection predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeerConnectionOptions {
    /// Alignment tolerance; see [`PROXIMITY_TOLERANCE`].
    pub tolerance: f64,
    pub color: Rgb,
    pub opacity: f64,
}

impl Default for PeerConnectionOptions {
    fn default() -> Self {
        Self {
            tolerance: PROXIMITY_TOLERANCE,
            color: Rgb::WHITE,
            opacity: 1.0,
        }
    }
}

/// A line segment between two scene positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionSegment {
    pub from: Point3,
    pub to: Point3,
    pub color: Rgb,
    pub opacity: f64,
}

/// Build node-to-node connections for pairs satisfying the mode's alignment
/// predicate.
///
/// Pairs are enumerated in `(i, j)` index order with `i < j`, visiting each
/// unordered pair exactly once, so no deduplication is needed and a node
/// never pairs with itself. Both predicates additionally require the
/// Euclidean distance to stay below the sphere radius, which excludes
/// near-antipodal pairs whose segment would cut diametrically through the
/// interior. Cost is O(n²) over the node count; n is bounded by the
/// sampling resolution.
#[must_use]
pub fn peer_connections(
    nodes: &[SurfaceNode],
    mode: ConnectionMode,
    sphere_radius: f64,
    options: &PeerConnectionOptions,
) -> Vec<ConnectionSegment> {
    if mode == ConnectionMode::None || nodes.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let a = nodes[i].position;
            let b = nodes[j].position;

            let aligned = match mode {
                ConnectionMode::Horizontal => (a.y - b.y).abs() < options.tolerance,
                ConnectionMode::Vertical => {
                    // Distance in the projection onto the equatorial plane.
                    let dx = a.x - b.x;
                    let dz = a.z - b.z;
                    (dx * dx + dz * dz).sqrt() < options.tolerance
                }
                ConnectionMode::None => false,
            };

            if aligned && a.distance_to(b) < sphere_radius {
                segments.push(ConnectionSegment {
                    from: a,
                    to: b,
                    color: options.color,
                    opacity: options.opacity,
                });
            }
        }
    }
    segments
}

/// Build one radial segment per node, from the node straight toward the
/// center and clipped at the inner sphere.
///
/// Each endpoint is `normalize(position) · inner_radius` — exactly on the
/// ray from the origin through the node. Nodes sitting on the origin have
/// no direction and are skipped.
#[must_use]
pub fn radial_connections(
    nodes: &[SurfaceNode],
    inner_radius: f64,
    color: Rgb,
    opacity: f64,
) -> Vec<ConnectionSegment> {
    nodes
        .iter()
        .filter_map(|node| {
            let direction = node.position.to_vec3().normalized()?;
            Some(ConnectionSegment {
                from: node.position,
                to: Point3::ORIGIN.add_vec(direction.mul_scalar(inner_radius)),
                color,
                opacity,
            })
        })
        .collect()
}
