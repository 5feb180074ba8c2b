use crate::volume::Volume;

/// Scalar sample types the renderer contract can describe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarType {
    U8,
}

impl ScalarType {
    pub fn size_in_bytes(self) -> usize {
        match self {
            ScalarType::U8 => 1,
        }
    }
}

/// Per-voxel scalar layout of an oriented buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarLayout {
    pub scalar_type: ScalarType,
    pub components: u32,
}

impl ScalarLayout {
    /// Single-component unsigned 8-bit samples
    pub fn grayscale_u8() -> Self {
        Self {
            scalar_type: ScalarType::U8,
            components: 1,
        }
    }
}

/// The volume reordered for a rendering backend: raw linear buffer in
/// `(x, y, z)` fastest-varying-axis-first order, plus the dimension triple,
/// voxel spacing and scalar layout the backend needs to build its own
/// representation. A transform artifact, always rebuilt from the volume.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererVolume {
    pub data: Vec<u8>,
    /// `(width, height, depth)`, the renderer's axis order
    pub dimensions: (u32, u32, u32),
    pub spacing: (f32, f32, f32),
    pub layout: ScalarLayout,
}

/// The single place that knows how array axis order `(depth, height, width)`
/// maps onto the renderer's `(x, y, z)` layout. Everything that crosses the
/// renderer boundary goes through this mapping rather than re-deriving the
/// transpose order at the call site.
pub struct OrientationMapper;

impl OrientationMapper {
    /// Linear position of voxel `(x, y, z)` in an oriented buffer for a
    /// volume of shape `(depth, height, width)`: x varies fastest, z slowest.
    pub fn oriented_index(dims: (usize, usize, usize), x: usize, y: usize, z: usize) -> usize {
        let (_, height, width) = dims;
        x + width * (y + height * z)
    }

    /// Reorder the volume into the renderer layout. Lossless permutation:
    /// `volume.data()[[z, y, x]] == oriented.data[oriented_index(dims, x, y, z)]`
    /// for every voxel. Performed once per load, not per frame.
    pub fn to_oriented(volume: &Volume) -> RendererVolume {
        let dims = volume.dim();
        let (depth, height, width) = dims;

        let mut data = vec![0u8; volume.len()];
        for ((z, y, x), &value) in volume.data().indexed_iter() {
            data[Self::oriented_index(dims, x, y, z)] = value;
        }

        RendererVolume {
            data,
            dimensions: (width as u32, height as u32, depth as u32),
            spacing: volume.spacing(),
            layout: ScalarLayout::grayscale_u8(),
        }
    }
}
