use std::fs;
use std::path::Path;

use anyhow::Result;
use image::ImageReader;
use log::debug;

use super::{external_regions, visibility_mask};
use crate::cli::CompressionLevel;
use crate::error::SashimiError;
use crate::output::save_sprite_image;

/// Knobs for sprite extraction.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Bounding boxes narrower or shorter than this are discarded as noise
    pub min_size: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { min_size: 10 }
    }
}

/// Counts reported after slicing a sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractSummary {
    /// External contours found, including ones discarded as noise
    pub contours: usize,
    /// Sprite files written
    pub saved: usize,
}

/// Slice a sprite sheet into one PNG per connected visible region.
///
/// Output files are named `sprite_{index:02}.png` where `index` is the
/// position in the contour discovery order. Discarded noise boxes still
/// advance the index, so surviving sprites keep stable names when specks
/// appear between them. Existing files with the same name are overwritten.
pub fn extract_sprites(
    sheet_path: &Path,
    output_dir: &Path,
    options: ExtractOptions,
    compress: Option<CompressionLevel>,
) -> Result<ExtractSummary> {
    let sheet = ImageReader::open(sheet_path)
        .map_err(|e| SashimiError::ImageLoad {
            path: sheet_path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SashimiError::ImageLoad {
            path: sheet_path.to_path_buf(),
            source: e,
        })?;

    let mask = visibility_mask(&sheet);
    let regions = external_regions(&mask);
    debug!(
        "Found {} external contours in '{}'",
        regions.len(),
        sheet_path.display()
    );

    fs::create_dir_all(output_dir).map_err(|e| SashimiError::OutputWrite {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let rgba = sheet.to_rgba8();
    let mut saved = 0;

    for (index, bounds) in regions.iter().enumerate() {
        if bounds.width < options.min_size || bounds.height < options.min_size {
            debug!(
                "Skipping contour {} ({}x{}): below minimum size",
                index, bounds.width, bounds.height
            );
            continue;
        }

        let sprite =
            image::imageops::crop_imm(&rgba, bounds.x, bounds.y, bounds.width, bounds.height)
                .to_image();
        let path = output_dir.join(format!("sprite_{index:02}.png"));
        save_sprite_image(&sprite, &path, compress)?;
        debug!("Saved {}", path.display());
        saved += 1;
    }

    Ok(ExtractSummary {
        contours: regions.len(),
        saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, color);
            }
        }
    }

    #[test]
    fn test_extracts_each_region_as_cropped_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet_path = tmp.path().join("sheet.png");
        let out_dir = tmp.path().join("out");

        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 200]);
        let mut sheet = RgbaImage::new(64, 32);
        fill_rect(&mut sheet, 2, 2, 12, 12, red);
        fill_rect(&mut sheet, 40, 4, 16, 16, green);
        sheet.save(&sheet_path).unwrap();

        let summary =
            extract_sprites(&sheet_path, &out_dir, ExtractOptions::default(), None).unwrap();

        assert_eq!(summary.contours, 2);
        assert_eq!(summary.saved, 2);

        // Topmost region is discovered first
        let first = image::open(out_dir.join("sprite_00.png")).unwrap().into_rgba8();
        assert_eq!(first.dimensions(), (12, 12));
        assert_eq!(first.get_pixel(0, 0), &red);
        assert_eq!(first.get_pixel(11, 11), &red);

        // Crop preserves per-pixel alpha from the sheet
        let second = image::open(out_dir.join("sprite_01.png")).unwrap().into_rgba8();
        assert_eq!(second.dimensions(), (16, 16));
        assert_eq!(second.get_pixel(8, 8), &green);
    }

    #[test]
    fn test_noise_is_skipped_but_keeps_indices() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet_path = tmp.path().join("sheet.png");
        let out_dir = tmp.path().join("out");

        let mut sheet = RgbaImage::new(48, 48);
        // 5x5 speck first in raster order, then a real sprite
        fill_rect(&mut sheet, 1, 1, 5, 5, Rgba([255, 255, 255, 255]));
        fill_rect(&mut sheet, 10, 20, 20, 20, Rgba([0, 0, 255, 255]));
        sheet.save(&sheet_path).unwrap();

        let summary =
            extract_sprites(&sheet_path, &out_dir, ExtractOptions::default(), None).unwrap();

        assert_eq!(summary.contours, 2);
        assert_eq!(summary.saved, 1);
        assert!(!out_dir.join("sprite_00.png").exists());
        let kept = image::open(out_dir.join("sprite_01.png")).unwrap().into_rgba8();
        assert_eq!(kept.dimensions(), (20, 20));
    }

    #[test]
    fn test_fully_transparent_sheet_yields_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet_path = tmp.path().join("sheet.png");
        let out_dir = tmp.path().join("out");

        RgbaImage::new(32, 32).save(&sheet_path).unwrap();

        let summary =
            extract_sprites(&sheet_path, &out_dir, ExtractOptions::default(), None).unwrap();

        assert_eq!(summary.contours, 0);
        assert_eq!(summary.saved, 0);
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_rgb_sheet_falls_back_to_luminance() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet_path = tmp.path().join("sheet.png");
        let out_dir = tmp.path().join("out");

        let mut sheet = image::RgbImage::new(32, 32);
        for y in 8..24 {
            for x in 8..24 {
                sheet.put_pixel(x, y, image::Rgb([200, 200, 200]));
            }
        }
        sheet.save(&sheet_path).unwrap();

        let summary =
            extract_sprites(&sheet_path, &out_dir, ExtractOptions::default(), None).unwrap();

        assert_eq!(summary.contours, 1);
        let sprite = image::open(out_dir.join("sprite_00.png")).unwrap().into_rgba8();
        assert_eq!(sprite.dimensions(), (16, 16));
        // RGB crops gain an opaque alpha channel
        assert_eq!(sprite.get_pixel(0, 0), &Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn test_missing_sheet_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let result = extract_sprites(
            &tmp.path().join("missing.png"),
            &tmp.path().join("out"),
            ExtractOptions::default(),
            None,
        );
        assert!(result.is_err());
    }
}
