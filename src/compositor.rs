use crate::error::{Result, VolumeError};
use crate::volume::Volume;

use image::Rgb;
use image::RgbImage;
use ndarray::{Array2, ArrayView2, s};
use rayon::prelude::*;

/// Frame rate the video-encoder contract defaults to
pub const DEFAULT_FPS: u32 = 10;

/// Builds one animation frame per depth index: the three orthogonal
/// cross-sections padded to a common square, laid out side by side,
/// normalized to full range and expanded to three channels.
pub struct FrameCompositor<'a> {
    volume: &'a Volume,
    fps: u32,
}

impl<'a> FrameCompositor<'a> {
    pub fn new(volume: &'a Volume) -> Self {
        Self {
            volume,
            fps: DEFAULT_FPS,
        }
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Target frame rate for the encoder
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frame size as (width, height) - standard image convention
    pub fn frame_dimensions(&self) -> (u32, u32) {
        let max_dim = max_dim(self.volume) as u32;
        (max_dim * 3, max_dim)
    }

    /// Lazy sequence of exactly `depth` frames. Each frame is derived
    /// independently from the immutable volume, so the sequence can be
    /// restarted by calling this again.
    pub fn frames(&self) -> Frames<'a> {
        Frames {
            volume: self.volume,
            index: 0,
        }
    }

    /// Compose the frame for one depth index.
    ///
    /// The coronal and sagittal indices are clamped to their axis bounds so
    /// that non-cubic volumes still yield a full-length sequence.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::IndexOutOfRange`] if `index >= depth`.
    pub fn compose(&self, index: usize) -> Result<RgbImage> {
        compose_frame(self.volume, index)
    }
}

/// Rescale a frame so its maximum sample becomes 255. This is the strict
/// primitive: an all-zero frame has no defined scale and fails with
/// [`VolumeError::DegenerateNormalization`]; the compositor catches that
/// case and emits the frame unchanged instead of dividing by zero.
pub fn normalize_full_range(frame: ArrayView2<'_, u8>) -> Result<Array2<u8>> {
    let max = frame.into_par_iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Err(VolumeError::DegenerateNormalization);
    }
    let max = f32::from(max);
    let mut normalized = frame.to_owned();
    normalized.par_mapv_inplace(|v| (f32::from(v) / max * 255.0) as u8);
    Ok(normalized)
}

fn max_dim(volume: &Volume) -> usize {
    let (depth, height, width) = volume.dim();
    depth.max(height).max(width)
}

fn compose_frame(volume: &Volume, index: usize) -> Result<RgbImage> {
    let (_, height, width) = volume.dim();
    let side = max_dim(volume);

    let axial = volume.axial(index)?;
    let coronal = volume.coronal(index.min(height.saturating_sub(1)))?;
    let sagittal = volume.sagittal(index.min(width.saturating_sub(1)))?;

    let mut combined = Array2::<u8>::zeros((side, side * 3));
    paste(&mut combined, axial.view(), 0);
    paste(&mut combined, coronal.view(), side);
    paste(&mut combined, sagittal.view(), side * 2);

    let combined = match normalize_full_range(combined.view()) {
        Ok(frame) => frame,
        Err(VolumeError::DegenerateNormalization) => {
            log::debug!("frame {index} has zero maximum, emitting black frame");
            combined
        }
        Err(other) => return Err(other),
    };

    Ok(gray_to_rgb(&combined))
}

/// Zero-pad by placement: the tile lands in the top-left of its cell, the
/// rest of the canvas stays zero (bottom/right padding).
fn paste(canvas: &mut Array2<u8>, tile: ArrayView2<'_, u8>, x_offset: usize) {
    let (rows, cols) = tile.dim();
    canvas
        .slice_mut(s![..rows, x_offset..x_offset + cols])
        .assign(&tile);
}

fn gray_to_rgb(frame: &Array2<u8>) -> RgbImage {
    let (rows, cols) = frame.dim();
    RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        let v = frame[[y as usize, x as usize]];
        Rgb([v, v, v])
    })
}

/// Iterator over the composited frames of a volume, one per depth index
pub struct Frames<'a> {
    volume: &'a Volume,
    index: usize,
}

impl Iterator for Frames<'_> {
    type Item = RgbImage;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, _, _) = self.volume.dim();
        if self.index >= depth {
            return None;
        }
        let frame = compose_frame(self.volume, self.index).ok()?;
        self.index += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (depth, _, _) = self.volume.dim();
        let remaining = depth.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
