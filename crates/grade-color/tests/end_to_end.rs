//! End-to-end behaviour of the pixel pipeline.

use approx::assert_abs_diff_eq;
use grade_color::prelude::*;
use grade_color::ColorError;

const SAMPLES: [PixelColor; 6] = [
    [0.0, 0.0, 0.0],
    [0.18, 0.18, 0.18],
    [1.0, 0.5, 0.25],
    [-0.05, 0.3, 2.5],
    [12.0, 0.001, 0.4],
    [0.9, 0.9, 0.95],
];

fn build(cfg: PipelineConfig) -> PixelPipeline {
    PixelPipeline::new(cfg).unwrap()
}

#[test]
fn linear_same_gamut_is_identity() {
    for variant in [PipelineVariant::Simple, PipelineVariant::Full] {
        for gamut in Gamut::ALL {
            let p = build(
                PipelineConfig::builder()
                    .variant(variant)
                    .input(GammaType::Linear, gamut)
                    .output(GammaType::Linear, gamut)
                    .white_point_adaptation(true)
                    .build()
                    .unwrap(),
            );
            for rgb in SAMPLES {
                let out = p.transform(rgb);
                for c in 0..3 {
                    assert_abs_diff_eq!(out[c], rgb[c], epsilon = 1e-5);
                }
            }
        }
    }
}

#[test]
fn gamut_round_trip_restores_encoded_pixel() {
    let cases = [
        (GammaType::AcesCct, Gamut::AcesAp1, GammaType::Rec709, Gamut::Rec709),
        (GammaType::ArriLogC4, Gamut::ArriWideGamut4, GammaType::DavinciIntermediate, Gamut::DavinciWideGamut),
        (GammaType::SonySLog3, Gamut::SGamut3Cine, GammaType::Gamma24, Gamut::P3D65),
        (GammaType::RedLog3G10, Gamut::RedWideGamutRgb, GammaType::Linear, Gamut::Xyz),
        (GammaType::CanonLog3, Gamut::Rec2020, GammaType::Srgb, Gamut::P3Dci),
    ];
    let encoded = [[0.4, 0.4, 0.4], [0.55, 0.42, 0.3], [0.3, 0.5, 0.45]];

    for adapted in [false, true] {
        for (in_gamma, in_gamut, out_gamma, out_gamut) in cases {
            let there = build(
                PipelineConfig::builder()
                    .input(in_gamma, in_gamut)
                    .output(out_gamma, out_gamut)
                    .white_point_adaptation(adapted)
                    .build()
                    .unwrap(),
            );
            let back = build(
                PipelineConfig::builder()
                    .input(out_gamma, out_gamut)
                    .output(in_gamma, in_gamut)
                    .white_point_adaptation(adapted)
                    .build()
                    .unwrap(),
            );
            for rgb in encoded {
                let out = back.transform(there.transform(rgb));
                for c in 0..3 {
                    assert!(
                        (out[c] - rgb[c]).abs() < 1e-3,
                        "{} {} -> {} {} (adapted={}): {:?} -> {:?}",
                        in_gamma, in_gamut, out_gamma, out_gamut, adapted, rgb, out
                    );
                }
            }
        }
    }
}

#[test]
fn ootf_pair_round_trips_through_pipeline() {
    let forward = build(
        PipelineConfig::builder()
            .variant(PipelineVariant::Simple)
            .input(GammaType::AcesCct, Gamut::AcesAp1)
            .output(GammaType::AcesCct, Gamut::AcesAp1)
            .ootf(false, true)
            .build()
            .unwrap(),
    );
    let inverse = build(
        PipelineConfig::builder()
            .variant(PipelineVariant::Simple)
            .input(GammaType::AcesCct, Gamut::AcesAp1)
            .output(GammaType::AcesCct, Gamut::AcesAp1)
            .ootf(true, false)
            .build()
            .unwrap(),
    );
    let rgb = [0.35, 0.42, 0.5];
    let out = inverse.transform(forward.transform(rgb));
    for c in 0..3 {
        assert_abs_diff_eq!(out[c], rgb[c], epsilon = 1e-4);
    }
}

#[test]
fn zones_classify_encoded_grey() {
    let p = build(
        PipelineConfig::builder()
            .variant(PipelineVariant::Zones)
            .input(GammaType::ArriLogC3, Gamut::ArriWideGamut3)
            .build()
            .unwrap(),
    );
    let grey = grade_transfer::middle_gray(GammaType::ArriLogC3);
    let out = p.transform([grey; 3]);
    assert_eq!(out, grade_ops::zones::PALETTE[7]);
    assert_abs_diff_eq!(out[0], 0.502, epsilon = 1e-3);
}

#[test]
fn preset_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("show.yaml");
    std::fs::write(
        &path,
        "variant: full\ninput_gamma: acescct\ninput_color_space: aces_ap1\n\
         output_gamma: rec709\noutput_color_space: rec709\n\
         white_point_adaptation_enabled: true\n",
    )
    .unwrap();

    let cfg = PipelineConfig::from_file(&path).unwrap();
    assert_eq!(cfg.input_color_space, Gamut::AcesAp1);
    assert!(cfg.white_point_adaptation_enabled);

    let missing = PipelineConfig::from_file(dir.path().join("nope.yaml"));
    assert!(matches!(missing, Err(ColorError::PresetNotFound { .. })));
}
