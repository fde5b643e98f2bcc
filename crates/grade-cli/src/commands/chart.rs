//! Zone chart listing

use crate::ChartArgs;
use anyhow::Result;
use grade_ops::zones::{self, CHART_SEGMENTS, PALETTE};

pub fn run(args: ChartArgs) -> Result<()> {
    println!("{:>4}  {:>6}  {:>6}  {:>5}  rgb", "band", "stop", "zone", "color");
    for segment in (0..CHART_SEGMENTS).rev() {
        let stop = zones::chart_segment_stop(segment);
        let level = zones::quantize_stop(stop);
        let idx = zones::palette_index(level);
        let c = PALETTE[idx];
        if args.bytes {
            let b = c.map(|v| (v * 255.0).round() as u8);
            println!("{segment:>4}  {stop:>+6.2}  {level:>+6.1}  {idx:>5}  {:>3} {:>3} {:>3}", b[0], b[1], b[2]);
        } else {
            println!("{segment:>4}  {stop:>+6.2}  {level:>+6.1}  {idx:>5}  {:.3} {:.3} {:.3}", c[0], c[1], c[2]);
        }
    }
    Ok(())
}
