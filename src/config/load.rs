use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SashimiConfig;

/// A loaded configuration file with its associated directory.
///
/// Paths in the config are relative to the config file location,
/// so we need to track where the config was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SashimiConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SashimiConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Resolve the sprite sheet path relative to the config file directory.
    pub fn resolve_sheet(&self) -> PathBuf {
        self.config_dir.join(&self.config.sheet)
    }

    /// Resolve the extracted-sprites directory relative to the config file directory.
    pub fn resolve_extracted_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.extracted_dir)
    }

    /// Resolve the normalized-sprites directory relative to the config file directory.
    pub fn resolve_centered_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.centered_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_paths() {
        let config = SashimiConfig::default();
        assert_eq!(config.sheet, "sprite_sheet.png");
        assert_eq!(config.extracted_dir, "sprites_extracted");
        assert_eq!(config.centered_dir, "sprites_centered");
        assert_eq!(config.min_size, 10);
        assert_eq!(config.scale_divisor, 4);
        assert_eq!(config.block_size, 32);
    }

    #[test]
    fn test_load_partial_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("project.sashimi");
        std::fs::write(&path, r#"{"sheet": "art/sheet.png", "min_size": 4}"#).unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.config.min_size, 4);
        assert_eq!(loaded.resolve_sheet(), tmp.path().join("art/sheet.png"));
        // Unspecified fields fall back to defaults
        assert_eq!(loaded.config.block_size, 32);
        assert_eq!(
            loaded.resolve_extracted_dir(),
            tmp.path().join("sprites_extracted")
        );
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.sashimi");
        std::fs::write(&path, "{not json").unwrap();

        assert!(LoadedConfig::load(&path).is_err());
    }
}
