mod core;
mod sample;
mod surface;

pub use self::core::{Point3, Tolerance, Transform, Vec3};
pub use sample::{sample_sphere, sample_surface_grid};
pub use surface::{SphereSurface, Surface, TorusSurface};
