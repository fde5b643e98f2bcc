//! The per-pixel pipeline.
//!
//! [`PixelPipeline`] resolves a validated [`PipelineConfig`] once (curve
//! function pointers, the concatenated gamut matrix, operator coefficients)
//! and then evaluates pixels as a pure function of their value, plus their
//! position for the zone chart.
//!
//! # Stage order
//!
//! | Variant | Stages |
//! |---------|--------|
//! | `Simple` | decode, [inverse OOTF], direct matrix, [forward OOTF], encode |
//! | `Full` | decode, [inverse OOTF], [tone map], matrix, [saturation], [forward OOTF], encode |
//! | `Zones` | chart color inside the strip, otherwise zone classification |
//!
//! # Example
//!
//! ```rust
//! use grade_color::{PipelineConfig, PixelPipeline};
//! use grade_core::{GammaType, Gamut};
//!
//! let cfg = PipelineConfig::builder()
//!     .input(GammaType::AcesCct, Gamut::AcesAp1)
//!     .output(GammaType::Rec709, Gamut::Rec709)
//!     .white_point_adaptation(true)
//!     .build()
//!     .unwrap();
//! let pipeline = PixelPipeline::new(cfg).unwrap();
//!
//! let out = pipeline.transform([0.4135, 0.4135, 0.4135]);
//! assert!((out[0] - out[2]).abs() < 1e-3);
//! ```

use grade_core::{PixelColor, Result};
use grade_math::Mat3;
use grade_ops::{ootf, zones, SaturationParams, ToneCurve};
use grade_transfer::{decoder, encoder, TransferFn};
use tracing::debug;

use crate::{PipelineConfig, PipelineVariant};

/// A configuration resolved for per-pixel evaluation.
#[derive(Debug, Clone)]
pub struct PixelPipeline {
    config: PipelineConfig,
    decode: TransferFn,
    encode: TransferFn,
    matrix: Mat3,
    tone: Option<ToneCurve>,
    saturation: Option<SaturationParams>,
}

impl PixelPipeline {
    /// Validates `config` and precomputes everything the stages need.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let full = config.variant == PipelineVariant::Full;
        let adapted = full && config.white_point_adaptation_enabled;
        let matrix = grade_primaries::conversion_matrix(
            config.input_color_space,
            config.output_color_space,
            adapted,
        );
        let tone = if full && config.tone_mapping_enabled {
            Some(config.tone_map_params()?.curve())
        } else {
            None
        };
        let saturation = if full && config.saturation_compression_enabled {
            Some(config.saturation_params()?)
        } else {
            None
        };

        debug!(
            variant = config.variant.name(),
            input = %config.input_gamma,
            input_space = %config.input_color_space,
            output = %config.output_gamma,
            output_space = %config.output_color_space,
            adapted,
            tone_map = tone.is_some(),
            saturation = saturation.is_some(),
            "Built pixel pipeline"
        );

        Ok(Self {
            decode: decoder(config.input_gamma),
            encode: encoder(config.output_gamma),
            config,
            matrix,
            tone,
            saturation,
        })
    }

    /// The configuration this pipeline was built from.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stage order in use.
    pub fn variant(&self) -> PipelineVariant {
        self.config.variant
    }

    /// Concatenated source -> destination gamut matrix.
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Transforms one pixel without position. The zone chart is never drawn.
    #[inline]
    pub fn transform(&self, rgb: PixelColor) -> PixelColor {
        match self.config.variant {
            PipelineVariant::Simple | PipelineVariant::Full => self.grade(rgb),
            PipelineVariant::Zones => self.classify(rgb),
        }
    }

    /// Transforms the pixel at `(x, y)` of a `width` x `height` frame.
    ///
    /// Position only matters to the zones variant with the chart enabled.
    #[inline]
    pub fn transform_at(&self, x: usize, y: usize, width: usize, height: usize, rgb: PixelColor) -> PixelColor {
        if self.config.variant == PipelineVariant::Zones
            && self.config.show_chart
            && zones::in_chart(x, width, self.config.chart_width_percent)
        {
            return zones::chart_color(y, height);
        }
        self.transform(rgb)
    }

    #[inline]
    fn grade(&self, rgb: PixelColor) -> PixelColor {
        let decode = self.decode;
        let mut c = [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])];
        if self.config.apply_inverse_ootf {
            c = ootf::apply_inverse(c);
        }
        if let Some(tone) = &self.tone {
            c = tone.apply(c);
        }
        c = self.matrix.transform_rgb(c);
        if let Some(sat) = &self.saturation {
            c = sat.apply(c);
        }
        if self.config.apply_forward_ootf {
            c = ootf::apply_forward(c);
        }
        let encode = self.encode;
        [encode(c[0]), encode(c[1]), encode(c[2])]
    }

    #[inline]
    fn classify(&self, rgb: PixelColor) -> PixelColor {
        zones::classify(rgb, self.config.input_gamma, self.config.is_display_referred)
    }
}
