use image::{RgbaImage, imageops};

/// Round up to the next multiple of `base`; exact multiples are unchanged.
pub fn next_multiple(n: u32, base: u32) -> u32 {
    let base = base.max(1);
    n.div_ceil(base) * base
}

/// Center a sprite on a fully transparent canvas whose dimensions are
/// each padded up to a multiple of `block`.
///
/// The offset is `(canvas - sprite) / 2` per axis with integer flooring,
/// so an odd difference leaves the extra pixel on the right/bottom. The
/// canvas starts fully transparent, so compositing the sprite over it is
/// a verbatim pixel copy: per-pixel alpha inside the sprite's footprint
/// is preserved exactly, everything outside stays transparent.
pub fn center_on_padded_canvas(sprite: &RgbaImage, block: u32) -> RgbaImage {
    let (w, h) = sprite.dimensions();
    let canvas_w = next_multiple(w, block);
    let canvas_h = next_multiple(h, block);

    let offset_x = (canvas_w - w) / 2;
    let offset_y = (canvas_h - h) / 2;

    let mut canvas = RgbaImage::new(canvas_w, canvas_h);
    imageops::replace(&mut canvas, sprite, i64::from(offset_x), i64::from(offset_y));
    canvas
}
