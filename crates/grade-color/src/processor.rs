//! Frame-level application of a [`PixelPipeline`].
//!
//! Pixels are independent, so a frame is split into rows and the rows are
//! processed in parallel with rayon (feature `parallel`, on by default).
//! Alpha in 4-channel buffers passes through untouched.
//!
//! # Example
//!
//! ```rust
//! use grade_color::{FrameProcessor, PipelineConfig, PixelPipeline};
//!
//! let pipeline = PixelPipeline::new(PipelineConfig::default()).unwrap();
//! let proc = FrameProcessor::new(pipeline);
//!
//! let mut frame = vec![0.5f32; 64 * 32 * 4];
//! proc.apply(&mut frame, 64, 32, 4).unwrap();
//! assert_eq!(frame[3], 0.5);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{ColorError, ColorResult, PixelPipeline};

/// Applies a pixel pipeline to interleaved `f32` frames.
#[derive(Debug, Clone)]
pub struct FrameProcessor {
    pipeline: PixelPipeline,
}

impl FrameProcessor {
    /// Wraps a built pipeline.
    pub fn new(pipeline: PixelPipeline) -> Self {
        Self { pipeline }
    }

    /// The wrapped pipeline.
    pub fn pipeline(&self) -> &PixelPipeline {
        &self.pipeline
    }

    /// Processes a frame in place, in parallel when the feature is enabled.
    pub fn apply(&self, data: &mut [f32], width: usize, height: usize, channels: usize) -> ColorResult<()> {
        trace!(width, height, channels, "FrameProcessor::apply");
        let row_len = check_frame(data, width, height, channels)?;
        debug!(width, height, channels, variant = self.pipeline.variant().name(), "Processing frame");

        #[cfg(feature = "parallel")]
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| self.process_row(row, y, width, height, channels));

        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| self.process_row(row, y, width, height, channels));

        Ok(())
    }

    /// Processes a frame in place on the calling thread.
    ///
    /// Produces output identical to [`FrameProcessor::apply`].
    pub fn apply_serial(&self, data: &mut [f32], width: usize, height: usize, channels: usize) -> ColorResult<()> {
        trace!(width, height, channels, "FrameProcessor::apply_serial");
        let row_len = check_frame(data, width, height, channels)?;
        for (y, row) in data.chunks_mut(row_len).enumerate() {
            self.process_row(row, y, width, height, channels);
        }
        Ok(())
    }

    /// Processes a copy of `data` and returns it.
    pub fn process(&self, data: &[f32], width: usize, height: usize, channels: usize) -> ColorResult<Vec<f32>> {
        let mut out = data.to_vec();
        self.apply(&mut out, width, height, channels)?;
        Ok(out)
    }

    #[inline]
    fn process_row(&self, row: &mut [f32], y: usize, width: usize, height: usize, channels: usize) {
        for (x, px) in row.chunks_exact_mut(channels).enumerate() {
            let out = self.pipeline.transform_at(x, y, width, height, [px[0], px[1], px[2]]);
            px[..3].copy_from_slice(&out);
        }
    }
}

/// Validates frame geometry and returns the row length in samples.
fn check_frame(data: &[f32], width: usize, height: usize, channels: usize) -> ColorResult<usize> {
    if width == 0 || height == 0 {
        return Err(ColorError::InvalidDimensions(format!(
            "width and height must be > 0, got {}x{}",
            width, height
        )));
    }
    if channels != 3 && channels != 4 {
        return Err(ColorError::InvalidDimensions(format!(
            "expected 3 or 4 channels, got {}",
            channels
        )));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| ColorError::InvalidDimensions("frame dimensions overflow".into()))?;
    if data.len() != expected {
        return Err(ColorError::SizeMismatch { expected, actual: data.len() });
    }
    Ok(width * channels)
}
