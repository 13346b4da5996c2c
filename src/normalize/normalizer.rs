use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::ImageReader;
use log::debug;

use super::{center_on_padded_canvas, scale_down};
use crate::cli::CompressionLevel;
use crate::error::SashimiError;
use crate::output::save_sprite_image;

/// Knobs for sprite normalization.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Integer divisor applied to both sprite dimensions
    pub scale_divisor: u32,
    /// Canvas dimensions are padded up to a multiple of this
    pub block_size: u32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            scale_divisor: 4,
            block_size: 32,
        }
    }
}

/// Downscale every `.png` in `input_dir` and center each on a padded
/// transparent canvas in `output_dir`, keeping filenames.
///
/// Files are visited in the lexicographic order `glob` yields. Non-PNG
/// files are never enumerated; a PNG that fails to decode aborts the
/// whole run. Returns the number of sprites written.
pub fn normalize_sprites(
    input_dir: &Path,
    output_dir: &Path,
    options: NormalizeOptions,
    compress: Option<CompressionLevel>,
) -> Result<usize> {
    if !input_dir.is_dir() {
        return Err(SashimiError::InputNotFound(input_dir.to_path_buf()).into());
    }

    fs::create_dir_all(output_dir).map_err(|e| SashimiError::OutputWrite {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let pattern = input_dir.join("*.png");
    let entries = glob::glob(&pattern.to_string_lossy())
        .with_context(|| format!("invalid glob pattern: {}", pattern.display()))?;

    let mut processed = 0;

    for entry in entries {
        let path = entry.with_context(|| {
            format!("failed to read directory entry in '{}'", input_dir.display())
        })?;

        let sprite = ImageReader::open(&path)
            .map_err(|e| SashimiError::ImageLoad {
                path: path.clone(),
                source: e.into(),
            })?
            .decode()
            .map_err(|e| SashimiError::ImageLoad {
                path: path.clone(),
                source: e,
            })?
            .into_rgba8();

        let resized = scale_down(&sprite, options.scale_divisor);
        let canvas = center_on_padded_canvas(&resized, options.block_size);

        let out_path = match path.file_name() {
            Some(name) => output_dir.join(name),
            None => continue,
        };
        save_sprite_image(&canvas, &out_path, compress)?;
        debug!(
            "Normalized {} ({}x{} -> {}x{})",
            out_path.display(),
            sprite.width(),
            sprite.height(),
            canvas.width(),
            canvas.height()
        );
        processed += 1;
    }

    Ok(processed)
}
