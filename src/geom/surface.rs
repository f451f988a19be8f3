use super::core::{Point3, Transform};
use std::f64::consts::{PI, TAU};

fn wrap_unit(value: f64) -> f64 {
    let t = value % 1.0;
    if t < 0.0 { t + 1.0 } else { t }
}

/// A parametric surface over a `(u, v)` domain.
///
/// Both the node sampler and the export rasterizer evaluate primitives
/// through this trait, so sphere and ring geometry share one sampling path.
pub trait Surface {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    #[must_use]
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// A sphere centered on the origin with the Y axis as polar axis.
///
/// `u` runs a full turn of longitude; `v` runs from the north pole (`v = 0`,
/// `y = radius`) to the south pole (`v = 1`, `y = -radius`). Pole rows
/// evaluate to coincident points, which is intentional: grid sampling emits
/// them as ordinary vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSurface {
    pub radius: f64,
}

impl SphereSurface {
    pub fn new(radius: f64) -> Result<Self, String> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err("sphere radius must be finite and > 0".to_string());
        }
        Ok(Self { radius })
    }
}

impl Surface for SphereSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let u = wrap_unit(u);
        let v = v.clamp(0.0, 1.0);

        let theta = TAU * u;
        let phi = PI * v;

        let sin_phi = phi.sin();
        Point3::new(
            self.radius * sin_phi * theta.cos(),
            self.radius * phi.cos(),
            self.radius * sin_phi * theta.sin(),
        )
    }
}

/// A torus whose local centerline lies in the XY plane, oriented into model
/// space by a rigid transform.
///
/// `u` runs around the centerline, `v` around the tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusSurface {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub orientation: Transform,
}

impl TorusSurface {
    pub fn new(major_radius: f64, minor_radius: f64, orientation: Transform) -> Result<Self, String> {
        if !major_radius.is_finite() || major_radius <= 0.0 {
            return Err("torus major radius must be finite and > 0".to_string());
        }
        if !minor_radius.is_finite() || minor_radius <= 0.0 {
            return Err("torus minor radius must be finite and > 0".to_string());
        }
        Ok(Self {
            major_radius,
            minor_radius,
            orientation,
        })
    }

    /// A point on the torus centerline (the circle of the major radius).
    #[must_use]
    pub fn centerline_at(&self, u: f64) -> Point3 {
        let theta = TAU * wrap_unit(u);
        self.orientation.apply_point(Point3::new(
            self.major_radius * theta.cos(),
            self.major_radius * theta.sin(),
            0.0,
        ))
    }
}

impl Surface for TorusSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let theta = TAU * wrap_unit(u);
        let phi = TAU * wrap_unit(v);

        let ring = self.major_radius + self.minor_radius * phi.cos();
        let local = Point3::new(
            ring * theta.cos(),
            ring * theta.sin(),
            self.minor_radius * phi.sin(),
        );
        self.orientation.apply_point(local)
    }
}
