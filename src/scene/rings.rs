//! Ring ("stripe") layout around the globe.

use crate::geom::Transform;
use std::f64::consts::{FRAC_PI_4, PI};

/// Fixed twist applied to every ring about the Z axis, so no ring lies flat
/// in the equatorial plane by default.
pub const RING_TWIST: f64 = FRAC_PI_4;

/// Cross-section segment count of a ring tube.
pub const RING_RADIAL_SEGMENTS: u32 = 16;

/// Segment count along a ring's centerline.
pub const RING_TUBULAR_SEGMENTS: u32 = 100;

/// Placement of one ring around the sphere.
///
/// Built fresh on every generation pass; a ring has no identity beyond its
/// index, and regenerating with the same inputs reproduces the exact same
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub index: u32,
    /// Tilt about the X axis, radians.
    pub tilt_angle: f64,
    /// Twist about the Z axis, radians (constant across rings).
    pub twist_angle: f64,
    pub major_radius: f64,
    pub minor_radius: f64,
    pub radial_segments: u32,
    pub tubular_segments: u32,
}

impl RingSpec {
    /// The rigid transform orienting this ring's local XY-plane torus into
    /// model space (tilt applied after twist).
    #[must_use]
    pub fn orientation(&self) -> Transform {
        Transform::rotate_x(self.tilt_angle) * Transform::rotate_z(self.twist_angle)
    }
}

/// Lay out `num_stripes` rings fanning evenly across a half turn.
///
/// Ring `i` is tilted by `i·π/num_stripes` about the X axis and twisted by
/// the fixed [`RING_TWIST`] about the Z axis; each ring hugs the sphere
/// (major radius = sphere radius) with a tube of `ring_thickness`. A count
/// of zero yields an empty layout — the angle step is only computed for a
/// positive count.
#[must_use]
pub fn generate_rings(num_stripes: u32, ring_thickness: f64, sphere_radius: f64) -> Vec<RingSpec> {
    if num_stripes == 0 {
        return Vec::new();
    }

    let angle_step = PI / f64::from(num_stripes);
    (0..num_stripes)
        .map(|index| RingSpec {
            index,
            tilt_angle: f64::from(index) * angle_step,
            twist_angle: RING_TWIST,
            major_radius: sphere_radius,
            minor_radius: ring_thickness,
            radial_segments: RING_RADIAL_SEGMENTS,
            tubular_segments: RING_TUBULAR_SEGMENTS,
        })
        .collect()
}
