use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::map::map_pixels;

/// Build the binary visibility mask of a sheet: 255 where a pixel is
/// visible, 0 everywhere else. Any value of 1 or more counts as visible.
///
/// Visibility comes from the alpha channel when the sheet has one, and
/// from grayscale luminance otherwise. The luminance fallback cannot tell
/// pure-black sprite pixels from a black background; both read as
/// invisible.
pub fn visibility_mask(sheet: &DynamicImage) -> GrayImage {
    let channel = if sheet.color().has_alpha() {
        map_pixels(&sheet.to_rgba8(), |_x, _y, p| Luma([p[3]]))
    } else {
        sheet.to_luma8()
    };

    threshold(&channel, 0, ThresholdType::Binary)
}
