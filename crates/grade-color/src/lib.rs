//! # grade-color
//!
//! The grading pipeline: configuration, per-pixel orchestration and frame
//! processing.
//!
//! A pixel is decoded from its input curve to linear light, optionally
//! passed through the inverse OOTF and the tone mapper, moved between gamuts
//! through XYZ, optionally saturation-compressed and passed through the
//! forward OOTF, then encoded with the output curve. The zones variant
//! instead replaces the pixel with its exposure false color.
//!
//! # Quick Start
//!
//! ```rust
//! use grade_color::{FrameProcessor, PipelineConfig, PipelineVariant, PixelPipeline};
//! use grade_core::{GammaType, Gamut};
//!
//! let config = PipelineConfig::builder()
//!     .variant(PipelineVariant::Full)
//!     .input(GammaType::SonySLog3, Gamut::SGamut3Cine)
//!     .output(GammaType::Rec709, Gamut::Rec709)
//!     .tone_mapping(1000.0, 100.0)
//!     .saturation(2.0, 0.8)
//!     .ootf(false, true)
//!     .build()?;
//!
//! let pipeline = PixelPipeline::new(config)?;
//! let rgb = pipeline.transform([0.41, 0.39, 0.35]);
//!
//! let mut frame = vec![0.4f32; 16 * 9 * 3];
//! FrameProcessor::new(pipeline).apply(&mut frame, 16, 9, 3)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`config`] - [`PipelineConfig`], builder, YAML presets
//! - [`pipeline`] - [`PixelPipeline`]
//! - [`processor`] - [`FrameProcessor`]
//!
//! # Dependencies
//!
//! - [`grade-transfer`] - curves
//! - [`grade-primaries`] - matrix tables
//! - [`grade-ops`] - OOTF, tone map, saturation, zones
//!
//! # Used By
//!
//! - `grade-cli` - command-line front end
//! - `grade-bench` - benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
mod error;
pub mod pipeline;
pub mod processor;

pub use config::{PipelineConfig, PipelineConfigBuilder, PipelineVariant};
pub use error::{ColorError, ColorResult};
pub use pipeline::PixelPipeline;
pub use processor::FrameProcessor;

/// Re-exports for convenience.
pub mod prelude {
    pub use crate::{ColorError, ColorResult, FrameProcessor, PipelineConfig, PipelineVariant, PixelPipeline};
    pub use grade_core::{GammaType, Gamut, PixelColor};
}
