use crate::enums::Orientation;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VolumeError {
    #[error("No volume loaded")]
    NotLoaded,

    #[error("Buffer length {actual} does not match dimensions {dims:?} ({expected} voxels)")]
    ShapeMismatch {
        dims: (usize, usize, usize),
        expected: usize,
        actual: usize,
    },

    #[error("{orientation:?} index {index} out of range for axis of length {len}")]
    IndexOutOfRange {
        orientation: Orientation,
        index: usize,
        len: usize,
    },

    #[error("Frame maximum is zero, normalization is undefined")]
    DegenerateNormalization,
}

pub type Result<T> = std::result::Result<T, VolumeError>;
