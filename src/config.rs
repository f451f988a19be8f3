//! Tunable parameters for a generation pass.
//!
//! A [`Config`] is an immutable snapshot: the editing surface produces a new
//! value on every change and passes it into [`crate::scene::assemble`]
//! explicitly, so the generator never observes a half-updated parameter set.
//!
//! Out-of-range numeric fields are clamped to their declared range by
//! [`Config::sanitized`] and unrecognized enum strings fall back to their
//! documented defaults — a generation pass favors visible-but-valid output
//! over failure.

use crate::color::Rgb;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Declared range of `sphere_radius`.
pub const SPHERE_RADIUS_RANGE: (f64, f64) = (0.1, 100.0);
/// Declared range of `num_stripes`.
pub const NUM_STRIPES_RANGE: (u32, u32) = (0, 20);
/// Declared range of `ring_thickness`.
pub const RING_THICKNESS_RANGE: (f64, f64) = (0.01, 0.2);
/// Declared range of `wireframe_segments`.
pub const WIREFRAME_SEGMENTS_RANGE: (u32, u32) = (8, 48);
/// Declared range of `node_size`.
pub const NODE_SIZE_RANGE: (f64, f64) = (0.01, 0.2);
/// Declared range of `node_interval`.
pub const NODE_INTERVAL_RANGE: (u32, u32) = (1, 10);
/// Declared range of `connection_thickness`.
pub const CONNECTION_THICKNESS_RANGE: (f64, f64) = (0.001, 0.1);
/// Declared range of `polar_size_multiplier`.
pub const POLAR_SIZE_MULTIPLIER_RANGE: (f64, f64) = (1.0, 5.0);
/// Declared range of `inner_sphere_ratio`.
pub const INNER_SPHERE_RATIO_RANGE: (f64, f64) = (0.1, 0.8);

/// Primitive kind used to render a surface node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Sphere,
    Box,
    Tetrahedron,
}

impl NodeShape {
    /// Resolve a shape name, falling back to [`NodeShape::Sphere`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sphere" => Self::Sphere,
            "box" => Self::Box,
            "tetrahedron" => Self::Tetrahedron,
            other => {
                warn!("unknown node shape `{other}`, falling back to sphere");
                Self::Sphere
            }
        }
    }
}

/// Peer connection mode for the proximity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl ConnectionMode {
    /// Resolve a mode name, falling back to [`ConnectionMode::None`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "none" => Self::None,
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            other => {
                warn!("unknown connection type `{other}`, falling back to none");
                Self::None
            }
        }
    }
}

/// The complete tunable parameter set of a generation pass.
///
/// All fields are independently settable; missing fields deserialize to
/// their defaults. `is_rotating` and `rotation_speed` are carried for the
/// rendering host and have no effect on generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub is_rotating: bool,
    pub rotation_speed: f64,
    pub sphere_radius: f64,
    pub num_stripes: u32,
    pub ring_thickness: f64,
    pub show_wireframe: bool,
    pub show_nodes: bool,
    pub show_inner_sphere: bool,
    pub wireframe_segments: u32,
    pub node_size: f64,
    pub node_interval: u32,
    #[serde(deserialize_with = "lenient_node_shape")]
    pub node_shape: NodeShape,
    pub polar_size_variation: bool,
    pub polar_size_multiplier: f64,
    pub polar_coloring: bool,
    pub equator_color: Rgb,
    pub pole_color: Rgb,
    #[serde(deserialize_with = "lenient_connection_mode")]
    pub connection_type: ConnectionMode,
    pub connection_thickness: f64,
    pub inner_sphere_ratio: f64,
    pub inner_sphere_wireframe: bool,
    pub connect_to_inner_sphere: bool,
    pub inner_sphere_connection_color: Rgb,
    pub inner_sphere_connection_opacity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_rotating: true,
            rotation_speed: 0.1,
            sphere_radius: 2.0,
            num_stripes: 8,
            ring_thickness: 0.04,
            show_wireframe: false,
            show_nodes: false,
            show_inner_sphere: false,
            wireframe_segments: 24,
            node_size: 0.05,
            node_interval: 1,
            node_shape: NodeShape::Sphere,
            polar_size_variation: false,
            polar_size_multiplier: 3.0,
            polar_coloring: true,
            equator_color: Rgb::WHITE,
            pole_color: Rgb::GRAY,
            connection_type: ConnectionMode::None,
            connection_thickness: 0.01,
            inner_sphere_ratio: 0.3,
            inner_sphere_wireframe: true,
            connect_to_inner_sphere: false,
            inner_sphere_connection_color: Rgb::WHITE,
            inner_sphere_connection_opacity: 0.3,
        }
    }
}

impl Config {
    /// Return a copy with every numeric field clamped to its declared range.
    ///
    /// Clamping is logged but never fails; the generation entry point runs
    /// every incoming configuration through this before use.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut cfg = self.clone();
        cfg.sphere_radius = clamp_f64_range("sphereRadius", cfg.sphere_radius, SPHERE_RADIUS_RANGE);
        cfg.num_stripes = clamp_u32("numStripes", cfg.num_stripes, NUM_STRIPES_RANGE);
        cfg.ring_thickness = clamp_f64_range("ringThickness", cfg.ring_thickness, RING_THICKNESS_RANGE);
        cfg.wireframe_segments =
            clamp_u32("wireframeSegments", cfg.wireframe_segments, WIREFRAME_SEGMENTS_RANGE);
        cfg.node_size = clamp_f64_range("nodeSize", cfg.node_size, NODE_SIZE_RANGE);
        cfg.node_interval = clamp_u32("nodeInterval", cfg.node_interval, NODE_INTERVAL_RANGE);
        cfg.polar_size_multiplier = clamp_f64_range(
            "polarSizeMultiplier",
            cfg.polar_size_multiplier,
            POLAR_SIZE_MULTIPLIER_RANGE,
        );
        cfg.connection_thickness = clamp_f64_range(
            "connectionThickness",
            cfg.connection_thickness,
            CONNECTION_THICKNESS_RANGE,
        );
        cfg.inner_sphere_ratio =
            clamp_f64_range("innerSphereRatio", cfg.inner_sphere_ratio, INNER_SPHERE_RATIO_RANGE);
        cfg.inner_sphere_connection_opacity = clamp_f64(
            "innerSphereConnectionOpacity",
            cfg.inner_sphere_connection_opacity,
            0.0,
            1.0,
        );
        cfg
    }

    /// Radius of the concentric inner sphere.
    #[must_use]
    pub fn inner_sphere_radius(&self) -> f64 {
        self.sphere_radius * self.inner_sphere_ratio
    }
}

fn clamp_f64(name: &str, value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        warn!("{name} is not finite, clamping to {min}");
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{name} {value} outside [{min}, {max}], clamped to {clamped}");
    }
    clamped
}

fn clamp_f64_range(name: &str, value: f64, (min, max): (f64, f64)) -> f64 {
    clamp_f64(name, value, min, max)
}

fn clamp_u32(name: &str, value: u32, (min, max): (u32, u32)) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{name} {value} outside [{min}, {max}], clamped to {clamped}");
    }
    clamped
}

fn lenient_node_shape<'de, D>(deserializer: D) -> Result<NodeShape, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(NodeShape::from_name(&name))
}

fn lenient_connection_mode<'de, D>(deserializer: D) -> Result<ConnectionMode, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(ConnectionMode::from_name(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_schema() {
        let cfg = Config::default();
        assert!(cfg.is_rotating);
        assert_eq!(cfg.num_stripes, 8);
        assert_eq!(cfg.ring_thickness, 0.04);
        assert_eq!(cfg.wireframe_segments, 24);
        assert_eq!(cfg.node_size, 0.05);
        assert_eq!(cfg.node_interval, 1);
        assert_eq!(cfg.node_shape, NodeShape::Sphere);
        assert_eq!(cfg.connection_type, ConnectionMode::None);
        assert_eq!(cfg.polar_size_multiplier, 3.0);
        assert_eq!(cfg.inner_sphere_ratio, 0.3);
        assert_eq!(cfg.equator_color, Rgb::WHITE);
        assert_eq!(cfg.pole_color, Rgb::GRAY);
        assert!(!cfg.show_wireframe && !cfg.show_nodes && !cfg.show_inner_sphere);
    }

    #[test]
    fn sanitized_clamps_out_of_range_fields() {
        let cfg = Config {
            sphere_radius: 0.0,
            connection_thickness: 1.0,
            num_stripes: 99,
            ring_thickness: 5.0,
            wireframe_segments: 2,
            node_size: 0.0,
            node_interval: 0,
            polar_size_multiplier: 10.0,
            inner_sphere_ratio: 0.95,
            inner_sphere_connection_opacity: 1.5,
            ..Config::default()
        };
        let clean = cfg.sanitized();

        assert_eq!(clean.sphere_radius, SPHERE_RADIUS_RANGE.0);
        assert_eq!(clean.connection_thickness, CONNECTION_THICKNESS_RANGE.1);
        assert_eq!(clean.num_stripes, 20);
        assert_eq!(clean.ring_thickness, 0.2);
        assert_eq!(clean.wireframe_segments, 8);
        assert_eq!(clean.node_size, 0.01);
        assert_eq!(clean.node_interval, 1);
        assert_eq!(clean.polar_size_multiplier, 5.0);
        assert_eq!(clean.inner_sphere_ratio, 0.8);
        assert_eq!(clean.inner_sphere_connection_opacity, 1.0);
    }

    #[test]
    fn sanitized_leaves_in_range_fields_untouched() {
        let cfg = Config::default();
        assert_eq!(cfg.sanitized(), cfg);
    }

    #[test]
    fn unknown_enum_names_fall_back_to_defaults() {
        assert_eq!(NodeShape::from_name("dodecahedron"), NodeShape::Sphere);
        assert_eq!(NodeShape::from_name("BOX"), NodeShape::Box);
        assert_eq!(ConnectionMode::from_name("diagonal"), ConnectionMode::None);
        assert_eq!(ConnectionMode::from_name("Vertical"), ConnectionMode::Vertical);
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let cfg: Config = serde_json::from_str(
            r##"{"numStripes": 12, "connectionType": "horizontal", "poleColor": "#334455"}"##,
        )
        .unwrap();
        assert_eq!(cfg.num_stripes, 12);
        assert_eq!(cfg.connection_type, ConnectionMode::Horizontal);
        assert_eq!(cfg.pole_color, Rgb::from_hex("#334455").unwrap());
        assert_eq!(cfg.node_size, 0.05);
    }

    #[test]
    fn deserializes_unknown_enum_string_leniently() {
        let cfg: Config =
            serde_json::from_str(r#"{"nodeShape": "torusknot", "connectionType": "mesh"}"#).unwrap();
        assert_eq!(cfg.node_shape, NodeShape::Sphere);
        assert_eq!(cfg.connection_type, ConnectionMode::None);
    }

    #[test]
    fn config_json_round_trips() {
        let cfg = Config {
            show_nodes: true,
            node_shape: NodeShape::Tetrahedron,
            connection_type: ConnectionMode::Vertical,
            ..Config::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
