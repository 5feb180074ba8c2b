use crate::enums::Orientation;
use crate::error::{Result, VolumeError};

use ndarray::Array2;
use ndarray::Array3;
use ndarray::s;

/// A dense stack of grayscale slices with shape `(depth, height, width)`,
/// indexed `[z, y, x]`. The buffer is never mutated after construction;
/// loading new data replaces the whole volume.
pub struct Volume {
    data: Array3<u8>,
    spacing: (f32, f32, f32),
}

impl Volume {
    pub fn new(data: Array3<u8>, spacing: (f32, f32, f32)) -> Self {
        Self { data, spacing }
    }

    /// Build a volume from a pre-decoded linear buffer in slice-stack order
    /// (z-major, row by row).
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ShapeMismatch`] if the buffer length disagrees
    /// with `depth * height * width`.
    pub fn from_raw(buffer: Vec<u8>, shape: (usize, usize, usize)) -> Result<Self> {
        let (depth, height, width) = shape;
        let expected = depth * height * width;
        if buffer.len() != expected {
            return Err(VolumeError::ShapeMismatch {
                dims: shape,
                expected,
                actual: buffer.len(),
            });
        }
        let data = Array3::from_shape_vec(shape, buffer).map_err(|_| {
            VolumeError::ShapeMismatch {
                dims: shape,
                expected,
                actual: expected,
            }
        })?;
        Ok(Self::new(data, (1.0, 1.0, 1.0)))
    }

    /// Deterministic test fixture: every row holds the horizontal gradient
    /// `round(255 * x / (width - 1))`, zero when the row has a single voxel.
    pub fn synthetic_gradient(shape: (usize, usize, usize)) -> Self {
        let (_, _, width) = shape;
        let data = Array3::from_shape_fn(shape, |(_z, _y, x)| {
            if width > 1 {
                (255.0 * x as f32 / (width - 1) as f32).round() as u8
            } else {
                0
            }
        });
        Self::new(data, (1.0, 1.0, 1.0))
    }

    /// Get the dimensions of the volume (depth, height, width)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Number of voxels in the volume
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// Voxel pitch along (x, y, z), unit spacing unless the loader knows better
    pub fn spacing(&self) -> (f32, f32, f32) {
        self.spacing
    }

    /// Number of slices along the axis the given orientation cuts through
    pub fn axis_len(&self, orientation: Orientation) -> usize {
        let dim = self.data.dim();
        match orientation {
            Orientation::Axial => dim.0,
            Orientation::Coronal => dim.1,
            Orientation::Sagittal => dim.2,
        }
    }

    /// Extract a cross-section as an owned copy. This is the strict
    /// primitive; callers that want slider semantics clamp the index first
    /// (see [`OffsetController::apply`](crate::navigation::OffsetController::apply)).
    ///
    /// Slices are recomputed on every call and share no storage with the
    /// volume, so a concurrent redraw can never observe a half-written view.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::IndexOutOfRange`] if `index` lies outside the
    /// axis the orientation cuts through.
    pub fn slice(&self, orientation: Orientation, index: usize) -> Result<Array2<u8>> {
        let len = self.axis_len(orientation);
        if index >= len {
            return Err(VolumeError::IndexOutOfRange {
                orientation,
                index,
                len,
            });
        }
        let view = match orientation {
            Orientation::Axial => self.data.slice(s![index, .., ..]),
            Orientation::Coronal => self.data.slice(s![.., index, ..]),
            Orientation::Sagittal => self.data.slice(s![.., .., index]),
        };
        Ok(view.to_owned())
    }

    /// Cross-section at depth index `z`, shaped `(height, width)`
    pub fn axial(&self, z: usize) -> Result<Array2<u8>> {
        self.slice(Orientation::Axial, z)
    }

    /// Cross-section at row index `y`, shaped `(depth, width)`
    pub fn coronal(&self, y: usize) -> Result<Array2<u8>> {
        self.slice(Orientation::Coronal, y)
    }

    /// Cross-section at column index `x`, shaped `(depth, height)`
    pub fn sagittal(&self, x: usize) -> Result<Array2<u8>> {
        self.slice(Orientation::Sagittal, x)
    }
}

/// Owner of the current volume. Queries before the first load fail with
/// [`VolumeError::NotLoaded`]; a successful load replaces the previous
/// volume in one step, the old buffer stays valid until the new one is
/// fully built.
#[derive(Default)]
pub struct VolumeStore {
    volume: Option<Volume>,
}

impl VolumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a pre-decoded buffer, replacing any previous volume.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ShapeMismatch`] if the buffer length disagrees
    /// with the declared shape; the previous volume is left untouched.
    pub fn load(&mut self, buffer: Vec<u8>, shape: (usize, usize, usize)) -> Result<&Volume> {
        let volume = Volume::from_raw(buffer, shape)?;
        let (depth, height, width) = volume.dim();
        log::debug!("loaded {depth}x{height}x{width} volume");
        Ok(self.volume.insert(volume))
    }

    /// Install an already-built volume, replacing any previous one
    pub fn load_volume(&mut self, volume: Volume) -> &Volume {
        self.volume.insert(volume)
    }

    /// Fill the store with the deterministic gradient fixture
    pub fn generate_synthetic(&mut self, shape: (usize, usize, usize)) -> &Volume {
        self.volume.insert(Volume::synthetic_gradient(shape))
    }

    /// # Errors
    ///
    /// Returns [`VolumeError::NotLoaded`] before the first successful load.
    pub fn dimensions(&self) -> Result<(usize, usize, usize)> {
        Ok(self.volume()?.dim())
    }

    /// # Errors
    ///
    /// Returns [`VolumeError::NotLoaded`] before the first successful load.
    pub fn volume(&self) -> Result<&Volume> {
        self.volume.as_ref().ok_or(VolumeError::NotLoaded)
    }
}
