//! Grid sampling of parametric surfaces.
//!
//! The sampler walks the full latitude × longitude vertex grid of a surface
//! in row-major emission order and keeps every `stride`-th vertex of that
//! flat sequence. Stride applies to the emission order, not per row, so the
//! kept set drifts across rows — this matches the reference layout and keeps
//! results deterministic. Coincident pole vertices and the duplicated seam
//! column are emitted as ordinary vertices; downstream stages make no
//! attempt to deduplicate them.

use super::core::Point3;
use super::surface::{Surface, SphereSurface};

/// Sample the full `(divisions + 1)²` vertex grid of a surface, keeping
/// every `stride`-th vertex in emission order.
///
/// Rows run along `v` from `v = 0` to `v = 1`; within a row, `u` runs from
/// `0` to `1` inclusive. A `stride` of 1 returns every grid vertex; a stride
/// larger than the vertex count yields a single vertex (the first).
#[must_use]
pub fn sample_surface_grid<S: Surface>(surface: &S, divisions: u32, stride: u32) -> Vec<Point3> {
    let divisions = divisions.max(1) as usize;
    let stride = stride.max(1) as usize;

    let (u0, u1) = surface.domain_u();
    let (v0, v1) = surface.domain_v();
    let step_u = (u1 - u0) / divisions as f64;
    let step_v = (v1 - v0) / divisions as f64;

    let side = divisions + 1;
    let mut points = Vec::with_capacity(side * side / stride + 1);

    let mut emitted = 0usize;
    for iv in 0..side {
        let v = v0 + step_v * iv as f64;
        for iu in 0..side {
            if emitted % stride == 0 {
                let u = u0 + step_u * iu as f64;
                points.push(surface.point_at(u, v));
            }
            emitted += 1;
        }
    }

    points
}

/// Sample a sphere of the given radius at `angular_resolution × angular_resolution`
/// divisions, keeping every `stride`-th vertex.
///
/// Degenerate inputs (`radius <= 0`) produce an empty set rather than an
/// error; the generation pass prefers empty primitive groups over failure.
#[must_use]
pub fn sample_sphere(radius: f64, angular_resolution: u32, stride: u32) -> Vec<Point3> {
    let Ok(sphere) = SphereSurface::new(radius) else {
        return Vec::new();
    };
    sample_surface_grid(&sphere, angular_resolution.max(2), stride)
}
