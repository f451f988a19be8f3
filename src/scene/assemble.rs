//! Composition of a full generation pass into a renderer-agnostic bundle.

use crate::color::Rgb;
use crate::config::{Config, ConnectionMode, NodeShape};
use crate::geom::sample_sphere;
use crate::scene::connections::{
    peer_connections, radial_connections, ConnectionSegment, PeerConnectionOptions,
};
use crate::scene::nodes::{resolve_attributes, NodeAttributeOptions, SurfaceNode};
use crate::scene::rings::{generate_rings, RingSpec};
use log::debug;

/// Descriptor for an outer or inner sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDescriptor {
    pub radius: f64,
    pub segments: u32,
    pub wireframe: bool,
    pub color: Rgb,
}

/// The complete output of one generation pass.
///
/// Plain geometric records with no rendering-API types; a rendering host
/// owns whatever GPU or canvas resources it derives from a bundle and is
/// responsible for releasing them before accepting the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBundle {
    pub rings: Vec<RingSpec>,
    pub outer_sphere: Option<SphereDescriptor>,
    pub inner_sphere: Option<SphereDescriptor>,
    pub nodes: Vec<SurfaceNode>,
    pub node_shape: NodeShape,
    pub peer_connections: Vec<ConnectionSegment>,
    pub connection_thickness: f64,
    pub radial_connections: Vec<ConnectionSegment>,
    /// Radius of the sphere the structure is built around.
    pub sphere_radius: f64,
}

impl SceneBundle {
    /// Radius of the smallest origin-centered sphere containing every
    /// primitive in the bundle. Used by the framing solver.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        let mut radius: f64 = self.sphere_radius;
        for ring in &self.rings {
            radius = radius.max(ring.major_radius + ring.minor_radius);
        }
        for node in &self.nodes {
            radius = radius.max(node.position.radius() + node.size);
        }
        radius
    }
}

/// Run a full generation pass.
///
/// A pure function of the configuration: the same input reproduces a
/// bit-identical bundle. The incoming configuration is sanitized first, so
/// out-of-range values degrade to their clamped equivalents instead of
/// failing. Each visibility flag gates its own primitive group; the only
/// cross-flag dependency is that radial connections require the inner
/// sphere to be shown.
#[must_use]
pub fn assemble(config: &Config) -> SceneBundle {
    let cfg = config.sanitized();

    let rings = generate_rings(cfg.num_stripes, cfg.ring_thickness, cfg.sphere_radius);

    let outer_sphere = cfg.show_wireframe.then(|| SphereDescriptor {
        radius: cfg.sphere_radius,
        segments: cfg.wireframe_segments,
        wireframe: true,
        color: Rgb::WHITE,
    });

    let inner_sphere = cfg.show_inner_sphere.then(|| SphereDescriptor {
        radius: cfg.inner_sphere_radius(),
        segments: cfg.wireframe_segments,
        wireframe: cfg.inner_sphere_wireframe,
        color: Rgb::WHITE,
    });

    // The sampled point set feeds both the node primitives and the
    // connection graphs; `show_nodes` gates only the primitives, so
    // connection families stay available while nodes are hidden.
    let wants_radial = cfg.show_inner_sphere && cfg.connect_to_inner_sphere;
    let needs_samples =
        cfg.show_nodes || cfg.connection_type != ConnectionMode::None || wants_radial;

    let sampled = if needs_samples {
        let points = sample_sphere(cfg.sphere_radius, cfg.wireframe_segments, cfg.node_interval);
        resolve_attributes(
            &points,
            cfg.sphere_radius,
            &NodeAttributeOptions {
                size_base: cfg.node_size,
                polar_size_variation: cfg.polar_size_variation,
                polar_size_multiplier: cfg.polar_size_multiplier,
                polar_coloring: cfg.polar_coloring,
                equator_color: cfg.equator_color,
                pole_color: cfg.pole_color,
            },
        )
    } else {
        Vec::new()
    };

    let peer_connections = if cfg.connection_type != ConnectionMode::None {
        peer_connections(
            &sampled,
            cfg.connection_type,
            cfg.sphere_radius,
            &PeerConnectionOptions::default(),
        )
    } else {
        Vec::new()
    };

    let radial_connections = if wants_radial {
        radial_connections(
            &sampled,
            cfg.inner_sphere_radius(),
            cfg.inner_sphere_connection_color,
            cfg.inner_sphere_connection_opacity,
        )
    } else {
        Vec::new()
    };

    let nodes = if cfg.show_nodes { sampled } else { Vec::new() };

    debug!(
        "assembled scene: {} rings, {} nodes, {} peer connections, {} radial connections",
        rings.len(),
        nodes.len(),
        peer_connections.len(),
        radial_connections.len()
    );

    SceneBundle {
        rings,
        outer_sphere,
        inner_sphere,
        nodes,
        node_shape: cfg.node_shape,
        peer_connections,
        connection_thickness: cfg.connection_thickness,
        radial_connections,
        sphere_radius: cfg.sphere_radius,
    }
}
