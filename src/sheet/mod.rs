mod bounds;
mod extractor;
mod mask;
mod regions;

pub use bounds::Bounds;
pub use extractor::{ExtractOptions, ExtractSummary, extract_sprites};
pub use mask::visibility_mask;
pub use regions::external_regions;
