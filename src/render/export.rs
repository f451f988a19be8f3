//! Single-shot PNG export.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use log::info;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

use crate::color::Rgb;
use crate::render::camera::{solve_framing, DEFAULT_FOV_DEGREES, DEFAULT_MARGIN};
use crate::render::raster::render;
use crate::render::surface::OutputSurface;
use crate::scene::SceneBundle;

/// Default square export resolution.
pub const DEFAULT_EXPORT_RESOLUTION: u32 = 2048;

const FILENAME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Errors raised by the export path.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Another export holds the surface lease.
    #[error("output surface is busy with another export")]
    SurfaceBusy,
    #[error("export resolution must be nonzero")]
    ZeroResolution,
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parameters of a single export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Output width and height in pixels; exports are square.
    pub resolution: u32,
    pub background: Rgb,
    pub fov_degrees: f64,
    pub margin: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_EXPORT_RESOLUTION,
            background: Rgb::BLACK,
            fov_degrees: DEFAULT_FOV_DEGREES,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Timestamped default export filename, `globe-YYYYMMDD-HHMMSS.png`.
#[must_use]
pub fn default_filename() -> String {
    let now = OffsetDateTime::now_utc();
    let stamp = now
        .format(FILENAME_FORMAT)
        .unwrap_or_else(|_| "export".to_string());
    format!("globe-{stamp}.png")
}

/// Export a scene bundle as a PNG at the given path.
///
/// Takes an exclusive lease on the surface for the duration; the surface
/// returns to its previous size whether the export succeeds or fails. The
/// framing camera is solved fresh from the bundle's bounding radius, so
/// the structure is always fully in frame regardless of any interactive
/// camera state.
pub fn export_png(
    bundle: &SceneBundle,
    surface: &OutputSurface,
    options: &ExportOptions,
    path: &Path,
) -> Result<(), ExportError> {
    if options.resolution == 0 {
        return Err(ExportError::ZeroResolution);
    }
    let lease = surface.lease(options.resolution, options.resolution)?;
    let (width, height) = lease.size();

    let camera = solve_framing(bundle.bounding_radius(), options.fov_degrees, options.margin);
    let raster = render(bundle, &camera, width, height, options.background);

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let encoder = PngEncoder::new(BufWriter::new(file));
    encoder.write_image(raster.pixels(), width, height, ExtendedColorType::Rgba8)?;

    info!("exported {width}x{height} PNG to {}", path.display());
    drop(lease);
    Ok(())
}
