//! Export rendering: framing camera, shared output surface and the
//! rasterizing PNG exporter.

mod camera;
mod export;
mod raster;
mod surface;

pub use camera::{solve_framing, FramingCamera, DEFAULT_FOV_DEGREES, DEFAULT_MARGIN};
pub use export::{
    default_filename, export_png, ExportError, ExportOptions, DEFAULT_EXPORT_RESOLUTION,
};
pub use raster::{render, Raster};
pub use surface::{OutputSurface, SurfaceLease};
