//! Curve, gamut and variant listing

use anyhow::Result;
use grade_color::PipelineVariant;
use grade_core::{GammaType, Gamut};

pub fn run() -> Result<()> {
    println!("Transfer curves:");
    for g in GammaType::ALL {
        let gray = grade_transfer::middle_gray(g);
        println!("  {:>2}  {:<22} {:<24} grey {:.4}", g.index(), g.key(), g.name(), gray);
    }

    println!("\nGamuts:");
    for g in Gamut::ALL {
        println!("  {:>2}  {:<22} {:<24} {:?}", g.index(), g.key(), g.name(), g.white_point());
    }

    println!("\nVariants:");
    for v in PipelineVariant::ALL {
        println!("  {}", v.name());
    }
    Ok(())
}
