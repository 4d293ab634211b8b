use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

use frostglass::{PipelineConfig, Stage, codec, pipeline};

#[derive(Parser, Debug)]
#[command(name = "frostglass", version)]
struct Cli {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pipeline config JSON with any of scale_factor, blur_radius, darken_alpha.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the pre-blur scale factor, (0, 1].
    #[arg(long)]
    scale_factor: Option<f32>,

    /// Override the blur radius, [1, 25].
    #[arg(long)]
    radius: Option<u32>,

    /// Override the darken overlay alpha, [0, 1].
    #[arg(long)]
    darken: Option<f32>,

    /// Suppress progress output.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config_json(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(f) = cli.scale_factor {
        config.scale_factor = f;
    }
    if let Some(r) = cli.radius {
        config.blur_radius = r;
    }
    if let Some(a) = cli.darken {
        config.darken_alpha = a;
    }

    let quiet = cli.quiet;
    if !quiet {
        eprintln!("Loading image...");
    }
    let bytes =
        fs::read(&cli.in_path).with_context(|| format!("read input '{}'", cli.in_path.display()))?;
    let raster = codec::decode_raster(&bytes)?;

    let result = pipeline::process_with_observer(&raster, &config, &mut |stage: Stage| {
        if !quiet {
            eprintln!("{}", stage.label());
        }
    });

    if !quiet {
        eprintln!("Saving...");
    }
    let png = codec::encode_png(&result)?;
    if let Some(parent) = cli.out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    fs::write(&cli.out, png).with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn read_config_json(path: &Path) -> anyhow::Result<PipelineConfig> {
    let s =
        fs::read_to_string(path).with_context(|| format!("open config '{}'", path.display()))?;
    Ok(PipelineConfig::from_json_str(&s)?)
}
