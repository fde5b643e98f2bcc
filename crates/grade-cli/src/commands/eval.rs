//! Single pixel evaluation

use crate::EvalArgs;
use anyhow::{Context, Result};
use grade_color::{PipelineConfig, PixelPipeline};
use tracing::info;

pub fn run(args: EvalArgs) -> Result<()> {
    let config = build_config(&args)?;
    let pipeline = PixelPipeline::new(config).context("Invalid pipeline configuration")?;

    let rgb = [args.rgb[0], args.rgb[1], args.rgb[2]];
    let out = pipeline.transform(rgb);
    info!(?rgb, ?out, "Evaluated pixel");

    println!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]);
    Ok(())
}

fn build_config(args: &EvalArgs) -> Result<PipelineConfig> {
    let mut config = match &args.preset {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load preset: {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if let Some(g) = args.from_gamma {
        config.input_gamma = g;
    }
    if let Some(g) = args.from_gamut {
        config.input_color_space = g;
    }
    if let Some(g) = args.to_gamma {
        config.output_gamma = g;
    }
    if let Some(g) = args.to_gamut {
        config.output_color_space = g;
    }
    config.apply_inverse_ootf |= args.inverse_ootf;
    config.apply_forward_ootf |= args.forward_ootf;
    if let Some(tm) = &args.tone_map {
        config.tone_mapping_enabled = true;
        config.max_input_nits = tm[0];
        config.max_output_nits = tm[1];
    }
    if let Some(sat) = &args.saturation {
        config.saturation_compression_enabled = true;
        config.knee = sat[0];
        config.max = sat[1];
    }
    config.white_point_adaptation_enabled |= args.adapt;
    config.is_display_referred |= args.display_referred;

    Ok(config)
}
