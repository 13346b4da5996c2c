use image::{RgbaImage, imageops::FilterType};

/// Scale a sprite down by an integer divisor using nearest-neighbor
/// resampling, preserving hard pixel edges. Dimensions floor-divide and
/// never drop below one pixel.
pub fn scale_down(sprite: &RgbaImage, divisor: u32) -> RgbaImage {
    let divisor = divisor.max(1);
    let (w, h) = sprite.dimensions();
    let new_width = (w / divisor).max(1);
    let new_height = (h / divisor).max(1);
    image::imageops::resize(sprite, new_width, new_height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_quarter_scale() {
        let sprite = RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255]));
        let resized = scale_down(&sprite, 4);
        assert_eq!(resized.dimensions(), (16, 16));
        assert_eq!(resized.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_dimensions_floor_divide() {
        let sprite = RgbaImage::new(18, 21);
        let resized = scale_down(&sprite, 4);
        assert_eq!(resized.dimensions(), (4, 5));
    }

    #[test]
    fn test_never_scales_to_zero() {
        let sprite = RgbaImage::new(3, 10);
        let resized = scale_down(&sprite, 4);
        assert_eq!(resized.dimensions(), (1, 2));
    }

    #[test]
    fn test_nearest_keeps_hard_edges() {
        // Left half red, right half blue; no blended pixels may appear
        let mut sprite = RgbaImage::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let color = if x < 4 {
                    Rgba([255, 0, 0, 255])
                } else {
                    Rgba([0, 0, 255, 255])
                };
                sprite.put_pixel(x, y, color);
            }
        }

        let resized = scale_down(&sprite, 4);

        assert_eq!(resized.dimensions(), (2, 2));
        for pixel in resized.pixels() {
            assert!(
                *pixel == Rgba([255, 0, 0, 255]) || *pixel == Rgba([0, 0, 255, 255]),
                "nearest-neighbor must not blend colors, got {:?}",
                pixel
            );
        }
    }
}
