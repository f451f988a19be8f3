//! Per-node size and color resolution.

use crate::color::Rgb;
use crate::geom::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inputs to attribute resolution, lifted out of the full configuration so
/// the resolver stays a pure per-point map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAttributeOptions {
    pub size_base: f64,
    pub polar_size_variation: bool,
    /// Size factor at the poles relative to the equator (≥ 1).
    pub polar_size_multiplier: f64,
    pub polar_coloring: bool,
    pub equator_color: Rgb,
    pub pole_color: Rgb,
}

/// A sampled surface point with its resolved render attributes.
///
/// Nodes are created once per generation pass and never mutated; a
/// configuration change produces an entirely new node set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceNode {
    pub position: Point3,
    /// `|y| / radius` of the sampled point, clamped to `[0, 1]`. Sole driver
    /// of size and color when polar variation or coloring is enabled.
    pub polar_distance: f64,
    pub size: f64,
    pub color: Rgb,
}

/// Resolve size and color for every sampled point.
///
/// Size interpolates linearly from `size_base` at the equator to
/// `size_base · polar_size_multiplier` at the poles when polar variation is
/// on; color interpolates in linear RGB from the equator color to the pole
/// color when polar coloring is on. Each node is independent of all others,
/// so the map runs in parallel under the `parallel` feature.
#[must_use]
pub fn resolve_attributes(
    points: &[Point3],
    radius: f64,
    options: &NodeAttributeOptions,
) -> Vec<SurfaceNode> {
    #[cfg(feature = "parallel")]
    {
        points
            .par_iter()
            .map(|&p| resolve_one(p, radius, options))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        points
            .iter()
            .map(|&p| resolve_one(p, radius, options))
            .collect()
    }
}

fn resolve_one(position: Point3, radius: f64, options: &NodeAttributeOptions) -> SurfaceNode {
    let polar_distance = if radius > 0.0 {
        (position.y.abs() / radius).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let size = if options.polar_size_variation {
        options.size_base * (1.0 + (options.polar_size_multiplier - 1.0) * polar_distance)
    } else {
        options.size_base
    };

    let color = if options.polar_coloring {
        options.equator_color.lerp(options.pole_color, polar_distance)
    } else {
        options.equator_color
    };

    SurfaceNode {
        position,
        polar_distance,
        size,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> NodeAttributeOptions {
        NodeAttributeOptions {
            size_base: 0.05,
            polar_size_variation: false,
            polar_size_multiplier: 3.0,
            polar_coloring: false,
            equator_color: Rgb::WHITE,
            pole_color: Rgb::GRAY,
        }
    }

    #[test]
    fn flat_sizing_ignores_polar_distance() {
        let points = [
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, -1.0, 1.0),
        ];
        for node in resolve_attributes(&points, 2.0, &options()) {
            assert_eq!(node.size, 0.05);
        }
    }

    #[test]
    fn polar_sizing_interpolates_linearly() {
        let opts = NodeAttributeOptions {
            polar_size_variation: true,
            ..options()
        };

        let pole = resolve_one(Point3::new(0.0, 2.0, 0.0), 2.0, &opts);
        let equator = resolve_one(Point3::new(2.0, 0.0, 0.0), 2.0, &opts);
        let halfway = resolve_one(Point3::new(0.0, 1.0, 0.0), 2.0, &opts);

        assert!((pole.size - 0.15).abs() < 1e-12);
        assert!((equator.size - 0.05).abs() < 1e-12);
        assert!((halfway.size - 0.10).abs() < 1e-12);
    }

    #[test]
    fn southern_hemisphere_mirrors_northern() {
        let opts = NodeAttributeOptions {
            polar_size_variation: true,
            polar_coloring: true,
            ..options()
        };
        let north = resolve_one(Point3::new(0.0, 1.5, 0.0), 2.0, &opts);
        let south = resolve_one(Point3::new(0.0, -1.5, 0.0), 2.0, &opts);
        assert_eq!(north.size, south.size);
        assert_eq!(north.color, south.color);
        assert_eq!(north.polar_distance, 0.75);
    }

    #[test]
    fn flat_coloring_uses_equator_color_everywhere() {
        let opts = NodeAttributeOptions {
            equator_color: Rgb::from_hex("#123456").unwrap(),
            ..options()
        };
        let node = resolve_one(Point3::new(0.0, 2.0, 0.0), 2.0, &opts);
        assert_eq!(node.color, opts.equator_color);
    }

    #[test]
    fn polar_coloring_hits_both_endpoints() {
        let opts = NodeAttributeOptions {
            polar_coloring: true,
            ..options()
        };
        let pole = resolve_one(Point3::new(0.0, -2.0, 0.0), 2.0, &opts);
        let equator = resolve_one(Point3::new(0.0, 0.0, 2.0), 2.0, &opts);
        assert_eq!(pole.color, Rgb::GRAY);
        assert_eq!(equator.color, Rgb::WHITE);
    }

    #[test]
    fn polar_distance_clamps_to_unit_range() {
        // A point numerically outside the sphere still resolves.
        let node = resolve_one(Point3::new(0.0, 3.0, 0.0), 2.0, &options());
        assert_eq!(node.polar_distance, 1.0);
    }
}
