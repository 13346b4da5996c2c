use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sashimi")]
#[command(version, about = "Sprite sheet slicer and normalizer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Slice a sprite sheet into individual sprite PNGs
    Extract(ExtractArgs),
    /// Downscale extracted sprites and center them on padded canvases
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Sprite sheet image to slice [default: sprite_sheet.png]
    pub sheet: Option<PathBuf>,

    /// Load settings from a .sashimi config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for extracted sprites [default: sprites_extracted]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Discard bounding boxes narrower or shorter than this [default: 10]
    #[arg(long, value_name = "PIXELS")]
    pub min_size: Option<u32>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Directory of sprite PNGs to normalize [default: sprites_extracted]
    pub input: Option<PathBuf>,

    /// Load settings from a .sashimi config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for normalized sprites [default: sprites_centered]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Divide sprite dimensions by this factor [default: 4]
    #[arg(long, value_name = "FACTOR")]
    pub scale_divisor: Option<u32>,

    /// Pad canvas dimensions up to a multiple of this [default: 32]
    #[arg(long, value_name = "PIXELS")]
    pub block_size: Option<u32>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
