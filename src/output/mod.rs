mod format;

pub use format::save_sprite_image;
