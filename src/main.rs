use std::path::PathBuf;

use clap::Parser;
use eink_quantize::DitherMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkframe::batch;
use inkframe::models::{ConvertConfig, Orientation};

#[derive(Parser)]
#[command(name = "inkframe")]
#[command(about = "Convert images into 800x480 palette-quantized BMPs for 7-color e-ink photo frames")]
struct Cli {
    /// Input image file or directory
    image_file: PathBuf,

    /// Image orientation
    #[arg(
        long,
        value_enum,
        num_args = 0..=1,
        default_value = "portrait",
        default_missing_value = "portrait"
    )]
    orient: Orientation,

    /// Image dithering algorithm (NONE(0) or FLOYDSTEINBERG(3))
    #[arg(
        long,
        num_args = 0..=1,
        value_parser = parse_dither,
        default_value = "3",
        default_missing_value = "3"
    )]
    dither: DitherMode,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

/// The dither flag speaks the frame vendor's numeric dialect: 0 for none,
/// 3 for Floyd-Steinberg. No other values exist.
fn parse_dither(s: &str) -> Result<DitherMode, String> {
    match s {
        "0" => Ok(DitherMode::None),
        "3" => Ok(DitherMode::FloydSteinberg),
        other => Err(format!("invalid dither mode '{other}' (expected 0 or 3)")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkframe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = ConvertConfig {
        input: cli.image_file,
        orientation: cli.orient,
        dither: cli.dither,
        verbose: cli.verbose,
    };

    println!("Input image: {}", config.input.display());
    println!("Orientation: {}", config.orientation);
    println!("Dither     : {}", config.dither);
    println!("Verbose    : {}", config.verbose);

    let summary = batch::run(&config);

    // Exit nonzero when nothing converts out of a non-empty run. An empty
    // directory still exits zero with its "Converted 0 from 0" line.
    if summary.total > 0 && summary.converted == 0 {
        anyhow::bail!("no files converted");
    }
    Ok(())
}
