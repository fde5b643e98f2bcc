//! Pipeline configuration.
//!
//! [`PipelineConfig`] carries every option the pipeline reads. It is plain
//! data: build it with [`PipelineConfig::builder`], load it from a YAML
//! preset, or fill the fields directly. Every path into a
//! [`crate::PixelPipeline`] runs [`PipelineConfig::validate`] so bad values
//! are rejected once, before any pixel is touched.
//!
//! # Preset format
//!
//! ```yaml
//! variant: full
//! input_gamma: arri_logc3
//! input_color_space: arri_wide_gamut3
//! output_gamma: rec709
//! output_color_space: rec709
//! apply_forward_ootf: true
//! tone_mapping_enabled: true
//! max_input_nits: 1000
//! max_output_nits: 100
//! ```
//!
//! Omitted fields take their [`Default`] values.

use std::path::Path;

use grade_core::{Error, GammaType, Gamut, Result};
use grade_ops::{SaturationParams, ToneMapParams};
use serde::{Deserialize, Serialize};

use crate::{ColorError, ColorResult};

/// Stage order used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineVariant {
    /// Decode, optional OOTFs, direct matrix, encode.
    Simple,
    /// Adds tone mapping, saturation compression and the adapted matrix table.
    #[default]
    Full,
    /// Exposure zone false color with an optional reference chart.
    Zones,
}

impl PipelineVariant {
    /// All variants.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Full, Self::Zones];

    /// Lowercase name as used in presets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Full => "full",
            Self::Zones => "zones",
        }
    }
}

impl std::str::FromStr for PipelineVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pipeline variant: '{}'", s))
    }
}

/// Options read by the pixel pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Stage order.
    pub variant: PipelineVariant,
    /// Curve decoded on input.
    pub input_gamma: GammaType,
    /// Curve encoded on output.
    pub output_gamma: GammaType,
    /// Source gamut.
    pub input_color_space: Gamut,
    /// Destination gamut.
    pub output_color_space: Gamut,
    /// Inverse OOTF after decode.
    pub apply_inverse_ootf: bool,
    /// Forward OOTF before encode.
    pub apply_forward_ootf: bool,
    /// Enables the highlight roll-off (full variant).
    pub tone_mapping_enabled: bool,
    /// Input white in nits.
    pub max_input_nits: f32,
    /// Output white in nits.
    pub max_output_nits: f32,
    /// Enables chroma compression (full variant).
    pub saturation_compression_enabled: bool,
    /// Compression shoulder, greater than 1.
    pub knee: f32,
    /// Chroma threshold in `[0, 1]`.
    pub max: f32,
    /// Uses the D65-adapted matrix table (full variant).
    pub white_point_adaptation_enabled: bool,
    /// Draws the zone chart strip (zones variant).
    pub show_chart: bool,
    /// Chart strip width as a percentage of the frame width.
    pub chart_width_percent: f32,
    /// Treats the source as display-referred (zones variant).
    pub is_display_referred: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            variant: PipelineVariant::Full,
            input_gamma: GammaType::Linear,
            output_gamma: GammaType::Linear,
            input_color_space: Gamut::Rec709,
            output_color_space: Gamut::Rec709,
            apply_inverse_ootf: false,
            apply_forward_ootf: false,
            tone_mapping_enabled: false,
            max_input_nits: 1000.0,
            max_output_nits: 100.0,
            saturation_compression_enabled: false,
            knee: 2.0,
            max: 0.8,
            white_point_adaptation_enabled: false,
            show_chart: false,
            chart_width_percent: 10.0,
            is_display_referred: false,
        }
    }
}

impl PipelineConfig {
    /// Starts a builder from the defaults.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Checks every numeric option against its accepted range.
    ///
    /// Parameters of disabled stages are checked too, so a preset cannot
    /// carry a value that would fail once the stage is switched on.
    pub fn validate(&self) -> Result<()> {
        self.tone_map_params()?;
        self.saturation_params()?;
        let pct = self.chart_width_percent;
        if !(0.0..=100.0).contains(&pct) {
            return Err(Error::invalid("chart_width_percent", pct, "within [0, 100]"));
        }
        Ok(())
    }

    /// Validated tone mapping white levels.
    pub fn tone_map_params(&self) -> Result<ToneMapParams> {
        ToneMapParams::new(self.max_input_nits, self.max_output_nits)
    }

    /// Validated saturation parameters.
    pub fn saturation_params(&self) -> Result<SaturationParams> {
        SaturationParams::new(self.knee, self.max)
    }

    /// Parses and validates a YAML preset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grade_color::PipelineConfig;
    /// use grade_core::GammaType;
    ///
    /// let cfg = PipelineConfig::from_yaml_str("input_gamma: acescct\n").unwrap();
    /// assert_eq!(cfg.input_gamma, GammaType::AcesCct);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> ColorResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a YAML preset from disk.
    pub fn from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ColorError::PresetNotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> ColorResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Builder for [`PipelineConfig`].
///
/// Setters never fail; the first rejected value is remembered and returned
/// by [`PipelineConfigBuilder::build`].
///
/// # Example
///
/// ```rust
/// use grade_color::{PipelineConfig, PipelineVariant};
/// use grade_core::{GammaType, Gamut};
///
/// let cfg = PipelineConfig::builder()
///     .variant(PipelineVariant::Full)
///     .input(GammaType::AcesCct, Gamut::AcesAp1)
///     .output(GammaType::Rec709, Gamut::Rec709)
///     .tone_mapping(1000.0, 100.0)
///     .build()
///     .unwrap();
/// assert!(cfg.tone_mapping_enabled);
///
/// let bad = PipelineConfig::builder().input_gamma_index(99).build();
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
    error: Option<Error>,
}

impl PipelineConfigBuilder {
    fn record<T>(&mut self, value: Result<T>) -> Option<T> {
        match value {
            Ok(v) => Some(v),
            Err(e) => {
                self.error.get_or_insert(e);
                None
            }
        }
    }

    /// Sets the stage order.
    pub fn variant(mut self, variant: PipelineVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Sets the input curve and gamut.
    pub fn input(mut self, gamma: GammaType, gamut: Gamut) -> Self {
        self.config.input_gamma = gamma;
        self.config.input_color_space = gamut;
        self
    }

    /// Sets the output curve and gamut.
    pub fn output(mut self, gamma: GammaType, gamut: Gamut) -> Self {
        self.config.output_gamma = gamma;
        self.config.output_color_space = gamut;
        self
    }

    /// Selects the input curve by index.
    pub fn input_gamma_index(mut self, index: usize) -> Self {
        if let Some(g) = self.record(GammaType::from_index(index)) {
            self.config.input_gamma = g;
        }
        self
    }

    /// Selects the output curve by index.
    pub fn output_gamma_index(mut self, index: usize) -> Self {
        if let Some(g) = self.record(GammaType::from_index(index)) {
            self.config.output_gamma = g;
        }
        self
    }

    /// Selects the input gamut by index.
    pub fn input_color_space_index(mut self, index: usize) -> Self {
        if let Some(g) = self.record(Gamut::from_index(index)) {
            self.config.input_color_space = g;
        }
        self
    }

    /// Selects the output gamut by index.
    pub fn output_color_space_index(mut self, index: usize) -> Self {
        if let Some(g) = self.record(Gamut::from_index(index)) {
            self.config.output_color_space = g;
        }
        self
    }

    /// Toggles the inverse and forward OOTF.
    pub fn ootf(mut self, inverse: bool, forward: bool) -> Self {
        self.config.apply_inverse_ootf = inverse;
        self.config.apply_forward_ootf = forward;
        self
    }

    /// Enables tone mapping between two white levels in nits.
    pub fn tone_mapping(mut self, max_input_nits: f32, max_output_nits: f32) -> Self {
        self.config.tone_mapping_enabled = true;
        self.config.max_input_nits = max_input_nits;
        self.config.max_output_nits = max_output_nits;
        self
    }

    /// Enables saturation compression.
    pub fn saturation(mut self, knee: f32, max: f32) -> Self {
        self.config.saturation_compression_enabled = true;
        self.config.knee = knee;
        self.config.max = max;
        self
    }

    /// Selects the adapted matrix table.
    pub fn white_point_adaptation(mut self, enabled: bool) -> Self {
        self.config.white_point_adaptation_enabled = enabled;
        self
    }

    /// Shows the zone chart in the left `width_percent` of the frame.
    pub fn chart(mut self, width_percent: f32) -> Self {
        self.config.show_chart = true;
        self.config.chart_width_percent = width_percent;
        self
    }

    /// Marks the source as display-referred.
    pub fn display_referred(mut self, enabled: bool) -> Self {
        self.config.is_display_referred = enabled;
        self
    }

    /// Returns the configuration, or the first rejected value.
    pub fn build(self) -> Result<PipelineConfig> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_identity() {
        let cfg = PipelineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.input_gamma, cfg.output_gamma);
        assert_eq!(cfg.input_color_space, cfg.output_color_space);
    }

    #[test]
    fn test_builder_rejects_first_error() {
        let err = PipelineConfig::builder()
            .input_color_space_index(15)
            .output_gamma_index(40)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { kind: "gamut", index: 15, count: 15 });
    }

    #[test]
    fn test_builder_indices() {
        let cfg = PipelineConfig::builder()
            .input_gamma_index(1)
            .input_color_space_index(1)
            .output_gamma_index(13)
            .output_color_space_index(12)
            .build()
            .unwrap();
        assert_eq!(cfg.input_gamma, GammaType::AcesCct);
        assert_eq!(cfg.input_color_space, Gamut::AcesAp1);
        assert_eq!(cfg.output_gamma, GammaType::Rec709);
        assert_eq!(cfg.output_color_space, Gamut::Rec709);
    }

    #[test]
    fn test_validation() {
        assert!(PipelineConfig::builder().saturation(1.0, 0.5).build().is_err());
        assert!(PipelineConfig::builder().saturation(2.0, 1.1).build().is_err());
        assert!(PipelineConfig::builder().tone_mapping(1000.0, 9.0).build().is_err());
        assert!(PipelineConfig::builder().chart(120.0).build().is_err());
        assert!(PipelineConfig::builder().chart(0.0).build().is_ok());
    }

    #[test]
    fn test_disabled_stage_still_validated() {
        let cfg = PipelineConfig { knee: 0.5, ..Default::default() };
        assert!(!cfg.saturation_compression_enabled);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_yaml_preset() {
        let yaml = "\
variant: zones
input_gamma: s_log3
input_color_space: sgamut3_cine
show_chart: true
chart_width_percent: 25
";
        let cfg = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.variant, PipelineVariant::Zones);
        assert_eq!(cfg.input_gamma, GammaType::SonySLog3);
        assert_eq!(cfg.input_color_space, Gamut::SGamut3Cine);
        assert_eq!(cfg.chart_width_percent, 25.0);
        assert_eq!(cfg.knee, 2.0);
    }

    #[test]
    fn test_yaml_rejects_unknowns() {
        assert!(matches!(
            PipelineConfig::from_yaml_str("input_gamma: logc9\n"),
            Err(ColorError::Yaml(_))
        ));
        assert!(matches!(
            PipelineConfig::from_yaml_str("gain: 2\n"),
            Err(ColorError::Yaml(_))
        ));
        assert!(matches!(
            PipelineConfig::from_yaml_str("max: 3.0\n"),
            Err(ColorError::Config(Error::InvalidParameter { name: "max", .. }))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let cfg = PipelineConfig::builder()
            .input(GammaType::RedLog3G10, Gamut::RedWideGamutRgb)
            .saturation(1.8, 0.7)
            .build()
            .unwrap();
        let yaml = cfg.to_yaml_string().unwrap();
        assert_eq!(PipelineConfig::from_yaml_str(&yaml).unwrap(), cfg);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Zones".parse::<PipelineVariant>().unwrap(), PipelineVariant::Zones);
        assert!("fancy".parse::<PipelineVariant>().is_err());
    }
}
