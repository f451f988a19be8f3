//! Framing camera solver for single-shot export.

use crate::geom::{Point3, Transform, Vec3};

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_DEGREES: f64 = 45.0;
/// Default framing margin. 1.0 puts the bounding sphere exactly at the
/// frame edge; larger values leave breathing room around it.
pub const DEFAULT_MARGIN: f64 = 1.2;

/// A solved export camera: position on the +Z axis looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingCamera {
    pub eye: Point3,
    pub distance: f64,
    pub fov_degrees: f64,
    /// World-to-view transform, looking at the origin with +Y up.
    pub view: Transform,
}

/// Solve the camera distance that frames an origin-centered bounding
/// sphere of the given radius.
///
/// The distance scales linearly with the radius and grows as the field of
/// view narrows. Any interactive camera state is irrelevant here; the
/// solved camera always starts from an identity transform and is aimed at
/// the origin.
#[must_use]
pub fn solve_framing(bounding_radius: f64, fov_degrees: f64, margin: f64) -> FramingCamera {
    let half_fov = fov_degrees.to_radians() / 2.0;
    let distance = bounding_radius * margin / half_fov.sin();
    let eye = Point3::new(0.0, 0.0, distance);
    // look_at only fails for a degenerate eye/target pair, which a
    // positive distance rules out.
    let view = Transform::look_at(eye, Point3::ORIGIN, Vec3::Y)
        .unwrap_or_else(Transform::identity);
    FramingCamera {
        eye,
        distance,
        fov_degrees,
        view,
    }
}
