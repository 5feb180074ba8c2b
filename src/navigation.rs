use crate::clipping::{ClipPlane, planes_for};
use crate::enums::Axis;
use crate::error::Result;
use crate::volume::Volume;

use ndarray::Array2;

/// Navigation command applied through [`OffsetController::apply`]. The
/// event-loop layer turns slider and keyboard input into one of these
/// instead of mutating renderer state from callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetChange {
    Set { x: isize, y: isize, z: isize },
    Nudge { axis: Axis, delta: isize },
    Center,
}

/// The three cross-sections at the current offsets
#[derive(Debug, Clone)]
pub struct OrthogonalSlices {
    pub axial: Array2<u8>,
    pub coronal: Array2<u8>,
    pub sagittal: Array2<u8>,
}

/// Everything a redraw may need after an offset change; the caller decides
/// which parts to push to the renderer.
#[derive(Debug, Clone)]
pub struct NavigationUpdate {
    pub slices: OrthogonalSlices,
    pub planes: [ClipPlane; 3],
}

/// Holds one navigation index per axis, always inside `[0, dim - 1]`.
///
/// Out-of-range input is clamped, never rejected: sliders and key repeats
/// cannot produce an invalid state. The strict counterpart is
/// [`Volume::slice`], which fails on bad indices instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetController {
    dims: (usize, usize, usize),
    x: usize,
    y: usize,
    z: usize,
}

impl OffsetController {
    /// Create a controller for a volume of shape `(depth, height, width)`,
    /// starting at the geometric center. Re-create on every load.
    pub fn new(dims: (usize, usize, usize)) -> Self {
        let mut controller = Self {
            dims,
            x: 0,
            y: 0,
            z: 0,
        };
        controller.center();
        controller
    }

    /// Reset all three offsets to `dim / 2`
    pub fn center(&mut self) {
        self.x = self.dims.2 / 2;
        self.y = self.dims.1 / 2;
        self.z = self.dims.0 / 2;
    }

    /// Set all three offsets, clamping each coordinate independently
    pub fn set(&mut self, x: isize, y: isize, z: isize) {
        self.x = Self::clamp(x, self.dims.2);
        self.y = Self::clamp(y, self.dims.1);
        self.z = Self::clamp(z, self.dims.0);
    }

    /// Move the offset along one axis by `delta` steps, clamped
    pub fn nudge(&mut self, axis: Axis, delta: isize) {
        match axis {
            Axis::X => self.x = Self::clamp((self.x as isize).saturating_add(delta), self.dims.2),
            Axis::Y => self.y = Self::clamp((self.y as isize).saturating_add(delta), self.dims.1),
            Axis::Z => self.z = Self::clamp((self.z as isize).saturating_add(delta), self.dims.0),
        }
    }

    /// Current `(x, y, z)` offsets
    pub fn offsets(&self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }

    /// Apply a navigation command and return the fresh cross-sections and
    /// clipping planes for the new offsets (clamp-then-extract path).
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::IndexOutOfRange`](crate::error::VolumeError::IndexOutOfRange)
    /// only when the controller was built for different dimensions than
    /// `volume`, or when an axis has zero length.
    pub fn apply(&mut self, volume: &Volume, change: OffsetChange) -> Result<NavigationUpdate> {
        match change {
            OffsetChange::Set { x, y, z } => self.set(x, y, z),
            OffsetChange::Nudge { axis, delta } => self.nudge(axis, delta),
            OffsetChange::Center => self.center(),
        }
        let slices = OrthogonalSlices {
            axial: volume.axial(self.z)?,
            coronal: volume.coronal(self.y)?,
            sagittal: volume.sagittal(self.x)?,
        };
        Ok(NavigationUpdate {
            slices,
            planes: planes_for(self.offsets()),
        })
    }

    fn clamp(value: isize, len: usize) -> usize {
        let max = len.saturating_sub(1) as isize;
        value.clamp(0, max) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_controller_starts_centered() {
        let controller = OffsetController::new((10, 10, 10));
        assert_eq!(controller.offsets(), (5, 5, 5));
    }

    #[test]
    fn center_uses_floor_division() {
        let mut controller = OffsetController::new((7, 5, 3));
        controller.set(0, 0, 0);
        controller.center();
        assert_eq!(controller.offsets(), (1, 2, 3));
    }

    #[test]
    fn set_clamps_each_axis_independently() {
        let mut controller = OffsetController::new((8, 4, 6));
        controller.set(-3, 100, 2);
        assert_eq!(controller.offsets(), (0, 3, 2));

        controller.set(isize::MAX, isize::MIN, -1);
        assert_eq!(controller.offsets(), (5, 0, 0));
    }

    #[test]
    fn nudge_clamps_at_both_ends() {
        let mut controller = OffsetController::new((8, 4, 6));
        controller.nudge(Axis::Z, 100);
        assert_eq!(controller.offsets().2, 7);
        controller.nudge(Axis::Z, -100);
        assert_eq!(controller.offsets().2, 0);
        controller.nudge(Axis::X, 2);
        assert_eq!(controller.offsets().0, 5);
    }

    #[test]
    fn apply_returns_slices_and_planes_for_new_offsets() {
        let volume = Volume::synthetic_gradient((8, 4, 6));
        let mut controller = OffsetController::new(volume.dim());

        let update = controller
            .apply(&volume, OffsetChange::Set { x: 1, y: 2, z: 3 })
            .unwrap();

        assert_eq!(update.slices.axial.dim(), (4, 6));
        assert_eq!(update.slices.coronal.dim(), (8, 6));
        assert_eq!(update.slices.sagittal.dim(), (8, 4));
        assert_eq!(update.planes, planes_for((1, 2, 3)));
    }

    #[test]
    fn apply_center_restores_default_offsets() {
        let volume = Volume::synthetic_gradient((10, 10, 10));
        let mut controller = OffsetController::new(volume.dim());
        controller.set(0, 0, 0);

        controller.apply(&volume, OffsetChange::Center).unwrap();
        assert_eq!(controller.offsets(), (5, 5, 5));
    }

    #[test]
    fn apply_nudge_steps_along_one_axis() {
        let volume = Volume::synthetic_gradient((10, 10, 10));
        let mut controller = OffsetController::new(volume.dim());

        let update = controller
            .apply(
                &volume,
                OffsetChange::Nudge {
                    axis: Axis::Y,
                    delta: 5,
                },
            )
            .unwrap();

        assert_eq!(controller.offsets(), (5, 9, 5));
        assert_eq!(update.planes[1].origin, [0.0, 9.0, 0.0]);
    }
}
