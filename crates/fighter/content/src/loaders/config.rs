//! Fighter configuration loader.

use std::path::Path;

use fighter_core::FighterConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for fighter tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    ///
    /// Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<FighterConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<FighterConfig> {
        let config: FighterConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("max_health = 500\n[mercy]\ntap_threshold = 5\n").unwrap();
        assert_eq!(config.max_health, 500);
        assert_eq!(config.mercy.tap_threshold, 5);
        assert_eq!(config.mercy.window_frames, 180);
        assert_eq!(config.meter, FighterConfig::default().meter);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = ConfigLoader::parse("[mercy]\nrestore_percent = 150\n").unwrap_err();
        assert!(err.to_string().contains("150"), "{err}");
    }
}
