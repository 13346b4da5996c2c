use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sashimi::cli::{CliArgs, Command, CompressionLevel, ExtractArgs, NormalizeArgs};
use sashimi::config::{CompressConfig, LoadedConfig};
use sashimi::normalize::{NormalizeOptions, normalize_sprites};
use sashimi::sheet::{ExtractOptions, extract_sprites};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let verbose = match &cli.command {
        Command::Extract(args) => args.verbose,
        Command::Normalize(args) => args.verbose,
    };

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Sashimi sprite slicer v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Extract(args) => run_extract(args),
        Command::Normalize(args) => run_normalize(args),
    }
}

fn run_extract(args: &ExtractArgs) -> Result<()> {
    let merged = merge_extract_config(args)?;

    let summary = extract_sprites(
        &merged.sheet,
        &merged.output,
        ExtractOptions {
            min_size: merged.min_size,
        },
        merged.compress,
    )?;

    info!(
        "Extracted {} sprites to '{}'",
        summary.contours,
        merged.output.display()
    );

    Ok(())
}

fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let merged = merge_normalize_config(args)?;

    let processed = normalize_sprites(
        &merged.input,
        &merged.output,
        NormalizeOptions {
            scale_divisor: merged.scale_divisor,
            block_size: merged.block_size,
        },
        merged.compress,
    )?;

    info!(
        "Processed {} sprites into '{}'",
        processed,
        merged.output.display()
    );

    Ok(())
}

/// Merged extract settings from CLI args and optional config file.
struct MergedExtract {
    sheet: PathBuf,
    output: PathBuf,
    min_size: u32,
    compress: Option<CompressionLevel>,
}

/// Merged normalize settings from CLI args and optional config file.
struct MergedNormalize {
    input: PathBuf,
    output: PathBuf,
    scale_divisor: u32,
    block_size: u32,
    compress: Option<CompressionLevel>,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_extract_config(args: &ExtractArgs) -> Result<MergedExtract> {
    let loaded_config = load_config(args.config.as_deref())?;

    let sheet = args.sheet.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_sheet())
            .unwrap_or_else(|| PathBuf::from("sprite_sheet.png"))
    });

    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_extracted_dir())
            .unwrap_or_else(|| PathBuf::from("sprites_extracted"))
    });

    let min_size = args.min_size.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.min_size)
            .unwrap_or(10)
    });

    let compress = merge_compress(args.compress, loaded_config.as_ref());

    Ok(MergedExtract {
        sheet,
        output,
        min_size,
        compress,
    })
}

fn merge_normalize_config(args: &NormalizeArgs) -> Result<MergedNormalize> {
    let loaded_config = load_config(args.config.as_deref())?;

    let input = args.input.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_extracted_dir())
            .unwrap_or_else(|| PathBuf::from("sprites_extracted"))
    });

    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_centered_dir())
            .unwrap_or_else(|| PathBuf::from("sprites_centered"))
    });

    let scale_divisor = args.scale_divisor.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.scale_divisor)
            .unwrap_or(4)
    });

    let block_size = args.block_size.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.block_size)
            .unwrap_or(32)
    });

    let compress = merge_compress(args.compress, loaded_config.as_ref());

    Ok(MergedNormalize {
        input,
        output,
        scale_divisor,
        block_size,
        compress,
    })
}

fn load_config(path: Option<&std::path::Path>) -> Result<Option<LoadedConfig>> {
    match path {
        Some(config_path) => Ok(Some(LoadedConfig::load(config_path).with_context(
            || format!("failed to load config: {}", config_path.display()),
        )?)),
        None => Ok(None),
    }
}

/// Compress setting: CLI option overrides config.
fn merge_compress(
    cli: Option<CompressionLevel>,
    loaded_config: Option<&LoadedConfig>,
) -> Option<CompressionLevel> {
    if cli.is_some() {
        cli
    } else if let Some(lc) = loaded_config {
        lc.config.compress.as_ref().map(|c| match c {
            CompressConfig::Level(n) => CompressionLevel::Level(*n),
            CompressConfig::Max(_) => CompressionLevel::Max,
        })
    } else {
        None
    }
}
