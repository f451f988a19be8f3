//! Shared output surface with an exclusive export lease.
//!
//! Interactive presentation and export share one surface. An export
//! temporarily resizes it to the export resolution; the lease guarantees
//! exclusivity while the resize is in effect and restores the original
//! size when it is released, on success and on failure alike.

use std::sync::{Mutex, MutexGuard};

use crate::render::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SurfaceState {
    width: u32,
    height: u32,
}

/// The shared raster surface.
#[derive(Debug)]
pub struct OutputSurface {
    state: Mutex<SurfaceState>,
}

impl OutputSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(SurfaceState { width, height }),
        }
    }

    /// Current surface size.
    ///
    /// Blocks briefly if a lease holds the surface.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        (state.width, state.height)
    }

    /// Take an exclusive lease resizing the surface for export.
    ///
    /// Fails with [`ExportError::SurfaceBusy`] if another lease is live;
    /// concurrent exports are rejected rather than queued.
    pub fn lease(&self, width: u32, height: u32) -> Result<SurfaceLease<'_>, ExportError> {
        let mut guard = self.state.try_lock().map_err(|_| ExportError::SurfaceBusy)?;
        let original = *guard;
        guard.width = width;
        guard.height = height;
        Ok(SurfaceLease { guard, original })
    }
}

/// Exclusive hold on the surface at export resolution.
///
/// Dropping the lease restores the surface to its pre-export size, so an
/// export that bails out early cannot leave the surface resized.
#[derive(Debug)]
pub struct SurfaceLease<'a> {
    guard: MutexGuard<'a, SurfaceState>,
    original: SurfaceState,
}

impl SurfaceLease<'_> {
    /// Size the surface holds for the duration of this lease.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.guard.width, self.guard.height)
    }
}

impl Drop for SurfaceLease<'_> {
    fn drop(&mut self) {
        *self.guard = self.original;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_resizes_and_drop_restores() {
        let surface = OutputSurface::new(800, 600);
        {
            let lease = surface.lease(2048, 2048).unwrap();
            assert_eq!(lease.size(), (2048, 2048));
        }
        assert_eq!(surface.size(), (800, 600));
    }

    #[test]
    fn concurrent_lease_is_rejected() {
        let surface = OutputSurface::new(800, 600);
        let _held = surface.lease(2048, 2048).unwrap();
        assert!(matches!(
            surface.lease(1024, 1024),
            Err(ExportError::SurfaceBusy)
        ));
    }

    #[test]
    fn abandoned_export_still_restores_size() {
        let surface = OutputSurface::new(800, 600);
        let lease = surface.lease(2048, 2048).unwrap();
        // Simulate an export failing partway through.
        drop(lease);
        assert_eq!(surface.size(), (800, 600));
        assert!(surface.lease(2048, 2048).is_ok());
    }
}
