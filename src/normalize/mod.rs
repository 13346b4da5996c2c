mod canvas;
mod normalizer;
mod resizer;

pub use canvas::{center_on_padded_canvas, next_multiple};
pub use normalizer::{NormalizeOptions, normalize_sprites};
pub use resizer::scale_down;
