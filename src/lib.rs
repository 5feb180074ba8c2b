//! # tomo-volume library
//!
//! This crate is the volume data model and slicing engine for visualizing
//! stacked-image datasets (sequential 2D grayscale slices forming a 3D
//! volume, e.g. focused-ion-beam tomography).
//!
//! It owns the 3D voxel buffer, extracts axis-aligned cross-sections in the
//! three medical axes:
//!  - Axial
//!  - Coronal
//!  - Sagittal
//!
//! manages clamped navigation offsets, and computes the geometry an external
//! volumetric renderer consumes: an oriented raw buffer with its dimension
//! triple and scalar layout, per-axis clipping planes, and scale-bar
//! endpoints projected through the renderer's camera. A frame compositor
//! turns the volume into an ordered sequence of equal-sized 3-channel frames
//! for a video encoder.
//!
//! File decoding, the rendering backend and the windowing layer are
//! collaborators, not part of this crate: data comes in as a pre-decoded
//! buffer plus shape, and rendering happens behind the [`RenderBackend`]
//! capability trait.
//!
//! # Examples
//!
//! ## Navigating a synthetic volume
//!
//! Generate a gradient volume, orient it for the renderer, then step the
//! depth offset and collect the fresh slices and clipping planes:
//!
//! ```
//! use tomo_volume::{
//!     Axis, OffsetChange, OffsetController, OrientationMapper, VolumeStore,
//! };
//!
//! let mut store = VolumeStore::new();
//! store.generate_synthetic((8, 4, 4));
//! let volume = store.volume().expect("volume was just generated");
//!
//! let oriented = OrientationMapper::to_oriented(volume);
//! assert_eq!(oriented.dimensions, (4, 4, 8));
//!
//! let mut offsets = OffsetController::new(volume.dim());
//! let update = offsets
//!     .apply(volume, OffsetChange::Nudge { axis: Axis::Z, delta: 2 })
//!     .expect("offsets stay in range");
//! assert_eq!(update.slices.axial.dim(), (4, 4));
//! assert_eq!(update.planes[2].origin, [0.0, 0.0, 6.0]);
//! ```

pub mod backend;
pub mod clipping;
pub mod compositor;
pub mod enums;
pub mod error;
pub mod navigation;
pub mod orientation;
pub mod scale_bar;
pub mod volume;

pub use backend::RenderBackend;
pub use clipping::{ClipPlane, planes_for};
pub use compositor::{DEFAULT_FPS, FrameCompositor, Frames, normalize_full_range};
pub use enums::{Axis, Orientation};
pub use error::{Result, VolumeError};
pub use navigation::{NavigationUpdate, OffsetChange, OffsetController, OrthogonalSlices};
pub use orientation::{OrientationMapper, RendererVolume, ScalarLayout, ScalarType};
pub use scale_bar::{ScaleBar, ScaleBarProjector};
pub use volume::{Volume, VolumeStore};
