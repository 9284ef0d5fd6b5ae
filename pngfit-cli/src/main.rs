use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use clap::Parser;

use pngfit::{DEFAULT_MAX_DIMENSION, ResizeConfig, ScalingAlgorithm};

#[derive(Parser, Debug)]
#[command(name = "pngfit")]
#[command(about = "Shrink an image so it fits a bounding square, as PNG")]
struct Args {
    /// Input image, or "-" for stdin
    input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Longest allowed side in pixels
    #[arg(short, long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dimension: u32,

    /// Use area averaging instead of Lanczos
    #[arg(long)]
    area: bool,

    /// Emit the result as base64 text
    #[arg(long)]
    base64: bool,

    /// Log pipeline details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let input = read_input(&args.input)?;

    let mut config = ResizeConfig::new(args.max_dimension);
    if args.area {
        config = config.with_scaling(ScalingAlgorithm::Area);
    }

    let image = pngfit::resize_with_config(&input, &config)
        .with_context(|| format!("failed to resize {}", args.input.display()))?;

    log::info!(
        "{} bytes -> {} bytes at {}{}",
        input.len(),
        image.data().len(),
        image.dimensions(),
        if image.was_resized() { "" } else { " (unchanged)" }
    );

    let bytes = if args.base64 {
        STANDARD.encode(image.data()).into_bytes()
    } else {
        image.into_data()
    };

    write_output(args.output.as_deref(), &bytes)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

