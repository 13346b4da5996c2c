use serde::{Deserialize, Serialize};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Sashimi configuration file structure.
///
/// All paths in the config are relative to the config file location.
/// The defaults reproduce the tool's built-in relative paths, so an empty
/// config file behaves exactly like running with no flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SashimiConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet image to slice
    pub sheet: String,
    /// Directory extracted sprites are written to (and read back by normalize)
    pub extracted_dir: String,
    /// Directory normalized sprites are written to
    pub centered_dir: String,
    /// Bounding boxes narrower or shorter than this are discarded as noise
    pub min_size: u32,
    /// Sprite dimensions are divided by this factor when normalizing
    pub scale_divisor: u32,
    /// Canvas dimensions are padded up to a multiple of this
    pub block_size: u32,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SashimiConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sheet: "sprite_sheet.png".to_string(),
            extracted_dir: "sprites_extracted".to_string(),
            centered_dir: "sprites_centered".to_string(),
            min_size: 10,
            scale_divisor: 4,
            block_size: 32,
            compress: None,
        }
    }
}
