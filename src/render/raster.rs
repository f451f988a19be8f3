//! Minimal deterministic rasterizer for the export path.
//!
//! Interactive presentation is the host's business; export only needs a
//! reproducible still, so primitives are drawn as wireframe polylines and
//! screen-space discs with simple alpha blending and no hidden-surface
//! removal.

use crate::color::Rgb;
use crate::geom::{Point3, SphereSurface, Surface, TorusSurface, Transform};
use crate::render::camera::FramingCamera;
use crate::scene::{SceneBundle, SphereDescriptor};

/// View-space near plane; points closer than this are culled.
const NEAR_PLANE: f64 = 1e-3;
/// Polyline resolution for sphere isocurves.
const ISOCURVE_STEPS: u32 = 64;

/// An RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let bg = background.to_rgba8(1.0);
        let mut pixels = vec![0; width as usize * height as usize * 4];
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Source-over blend of a single pixel; out-of-bounds writes are dropped.
    fn blend(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let alpha = f64::from(rgba[3]) / 255.0;
        for channel in 0..3 {
            let dst = f64::from(self.pixels[idx + channel]);
            let src = f64::from(rgba[channel]);
            self.pixels[idx + channel] = (src * alpha + dst * (1.0 - alpha)).round() as u8;
        }
        self.pixels[idx + 3] = 255;
    }

    /// Bresenham line between two screen-space points.
    fn line(&mut self, a: (f64, f64), b: (f64, f64), rgba: [u8; 4]) {
        let (mut x0, mut y0) = (a.0.round() as i64, a.1.round() as i64);
        let (x1, y1) = (b.0.round() as i64, b.1.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend(x0, y0, rgba);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x0 += sx;
            }
            if doubled <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Filled disc at a screen-space center.
    fn disc(&mut self, center: (f64, f64), radius: f64, rgba: [u8; 4]) {
        let r = radius.max(1.0);
        let (cx, cy) = center;
        let x_min = (cx - r).floor() as i64;
        let x_max = (cx + r).ceil() as i64;
        let y_min = (cy - r).floor() as i64;
        let y_max = (cy + r).ceil() as i64;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, rgba);
                }
            }
        }
    }
}

/// Perspective projection through a solved framing camera.
#[derive(Debug, Clone, Copy)]
struct Projector {
    view: Transform,
    focal: f64,
    half_width: f64,
    half_height: f64,
}

impl Projector {
    fn new(camera: &FramingCamera, width: u32, height: u32) -> Self {
        let half_fov = camera.fov_degrees.to_radians() / 2.0;
        Self {
            view: camera.view,
            focal: f64::from(height) / 2.0 / half_fov.tan(),
            half_width: f64::from(width) / 2.0,
            half_height: f64::from(height) / 2.0,
        }
    }

    /// Project a world point to screen space with its view depth.
    /// Returns `None` for points behind the near plane.
    fn project(&self, p: Point3) -> Option<((f64, f64), f64)> {
        let v = self.view.apply_point(p);
        let depth = -v.z;
        if depth < NEAR_PLANE {
            return None;
        }
        let sx = self.half_width + v.x * self.focal / depth;
        let sy = self.half_height - v.y * self.focal / depth;
        Some(((sx, sy), depth))
    }

    fn screen_radius(&self, world_radius: f64, depth: f64) -> f64 {
        world_radius * self.focal / depth
    }
}

/// Rasterize a scene bundle as seen by the given camera.
#[must_use]
pub fn render(
    bundle: &SceneBundle,
    camera: &FramingCamera,
    width: u32,
    height: u32,
    background: Rgb,
) -> Raster {
    let mut raster = Raster::new(width, height, background);
    let proj = Projector::new(camera, width, height);

    if let Some(descriptor) = &bundle.outer_sphere {
        draw_sphere(&mut raster, &proj, descriptor);
    }
    if let Some(descriptor) = &bundle.inner_sphere {
        draw_sphere(&mut raster, &proj, descriptor);
    }

    for ring in &bundle.rings {
        // Constructor parameters come from a sanitized config, so they
        // are always in range.
        if let Ok(torus) = TorusSurface::new(ring.major_radius, ring.minor_radius, ring.orientation())
        {
            let rgba = Rgb::WHITE.to_rgba8(1.0);
            let steps = ring.tubular_segments;
            let mut prev = proj.project(torus.centerline_at(0.0));
            for i in 1..=steps {
                let next = proj.project(torus.centerline_at(f64::from(i) / f64::from(steps)));
                if let (Some((a, _)), Some((b, _))) = (prev, next) {
                    raster.line(a, b, rgba);
                }
                prev = next;
            }
        }
    }

    for segment in bundle
        .peer_connections
        .iter()
        .chain(&bundle.radial_connections)
    {
        let rgba = segment.color.to_rgba8(segment.opacity);
        if let (Some((a, _)), Some((b, _))) =
            (proj.project(segment.from), proj.project(segment.to))
        {
            raster.line(a, b, rgba);
        }
    }

    for node in &bundle.nodes {
        if let Some((center, depth)) = proj.project(node.position) {
            let rgba = node.color.to_rgba8(1.0);
            raster.disc(center, proj.screen_radius(node.size, depth), rgba);
        }
    }

    raster
}

fn draw_sphere(raster: &mut Raster, proj: &Projector, descriptor: &SphereDescriptor) {
    let Ok(sphere) = SphereSurface::new(descriptor.radius) else {
        return;
    };
    let rgba = descriptor.color.to_rgba8(1.0);

    if !descriptor.wireframe {
        // Solid spheres project to a filled disc of the silhouette radius.
        if let Some((center, depth)) = proj.project(Point3::ORIGIN) {
            raster.disc(center, proj.screen_radius(descriptor.radius, depth), rgba);
        }
        return;
    }

    let segments = descriptor.segments.max(1);
    // Longitude isocurves, pole to pole.
    for i in 0..segments {
        let u = f64::from(i) / f64::from(segments);
        draw_polyline(raster, proj, rgba, |t| sphere.point_at(u, t));
    }
    // Latitude isocurves, skipping the degenerate pole rows.
    for j in 1..segments {
        let v = f64::from(j) / f64::from(segments);
        draw_polyline(raster, proj, rgba, |t| sphere.point_at(t, v));
    }
}

fn draw_polyline(
    raster: &mut Raster,
    proj: &Projector,
    rgba: [u8; 4],
    curve: impl Fn(f64) -> Point3,
) {
    let mut prev = proj.project(curve(0.0));
    for i in 1..=ISOCURVE_STEPS {
        let next = proj.project(curve(f64::from(i) / f64::from(ISOCURVE_STEPS)));
        if let (Some((a, _)), Some((b, _))) = (prev, next) {
            raster.line(a, b, rgba);
        }
        prev = next;
    }
}
