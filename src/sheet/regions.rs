use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use super::Bounds;

/// Bounding boxes of the external contours in a binary mask, in the
/// discovery order of the border-following scan (topmost, then leftmost
/// region first).
///
/// Holes inside a region produce internal borders; those are ignored, as
/// are regions nested inside a hole of another region. The returned order
/// is observable in output filenames but is not part of the contract.
pub fn external_regions(mask: &GrayImage) -> Vec<Bounds> {
    find_contours::<u32>(mask)
        .iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter_map(|c| Bounds::of_points(&c.points))
        .collect()
}
