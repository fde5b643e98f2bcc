//! grade - evaluate the color grading pipeline from the command line

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use grade_color::PipelineVariant;
use grade_core::{GammaType, Gamut};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "grade")]
#[command(author, version, about = "Per-pixel color grading pipeline")]
#[command(long_about = "
Evaluates the grading pipeline on single pixels and prints reference data.

Examples:
  grade eval 0.41 0.41 0.41 --from-gamma acescct --from-gamut aces-ap1 \\
             --to-gamma rec709 --to-gamut rec709 --adapt
  grade eval 0.6 0.4 0.3 --preset show.yaml --tone-map 1000 100
  grade eval 0.39 0.39 0.39 --variant zones --from-gamma logc3
  grade chart                           # zone chart bands, top to bottom
  grade list                            # curve and gamut names
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform one RGB pixel
    #[command(visible_alias = "e")]
    Eval(EvalArgs),

    /// Print the exposure zone reference chart
    Chart(ChartArgs),

    /// List curves, gamuts and variants
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args)]
struct EvalArgs {
    /// Encoded R G B values
    #[arg(num_args = 3, required = true, allow_negative_numbers = true, value_names = ["R", "G", "B"])]
    rgb: Vec<f32>,

    /// YAML preset loaded before the flags below are applied
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Stage order: simple, full, zones
    #[arg(long)]
    variant: Option<PipelineVariant>,

    /// Input transfer curve
    #[arg(long)]
    from_gamma: Option<GammaType>,

    /// Input gamut
    #[arg(long)]
    from_gamut: Option<Gamut>,

    /// Output transfer curve
    #[arg(long)]
    to_gamma: Option<GammaType>,

    /// Output gamut
    #[arg(long)]
    to_gamut: Option<Gamut>,

    /// Apply the inverse OOTF after decode
    #[arg(long)]
    inverse_ootf: bool,

    /// Apply the forward OOTF before encode
    #[arg(long)]
    forward_ootf: bool,

    /// Tone map from IN to OUT nits
    #[arg(long, num_args = 2, value_names = ["IN", "OUT"])]
    tone_map: Option<Vec<f32>>,

    /// Saturation compression with KNEE and MAX
    #[arg(long, num_args = 2, value_names = ["KNEE", "MAX"])]
    saturation: Option<Vec<f32>>,

    /// Use the D65-adapted matrix table
    #[arg(long)]
    adapt: bool,

    /// Treat the source as display-referred (zones variant)
    #[arg(long)]
    display_referred: bool,
}

#[derive(Args)]
struct ChartArgs {
    /// Also print each band's RGB as 8-bit values
    #[arg(long)]
    bytes: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Eval(args) => commands::eval::run(args),
        Commands::Chart(args) => commands::chart::run(args),
        Commands::List => commands::list::run(),
    }
}
