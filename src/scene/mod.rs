//! Scene generation: rings, surface nodes, connection graphs and the
//! assembler that composes them into a [`SceneBundle`].

mod assemble;
mod connections;
mod nodes;
mod rings;

pub use assemble::{assemble, SceneBundle, SphereDescriptor};
pub use connections::{
    peer_connections, radial_connections, ConnectionSegment, PeerConnectionOptions,
    PROXIMITY_TOLERANCE,
};
pub use nodes::{resolve_attributes, NodeAttributeOptions, SurfaceNode};
pub use rings::{
    generate_rings, RingSpec, RING_RADIAL_SEGMENTS, RING_TUBULAR_SEGMENTS, RING_TWIST,
};
