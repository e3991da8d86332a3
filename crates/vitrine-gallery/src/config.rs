//! Viewer configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/vitrine-gallery/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use vitrine_core::DisplayMode;

/// Floor for the auto-play interval so a pathological config can't spin
/// the timer.
pub const MIN_AUTO_PLAY_MS: u64 = 100;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory holding gallery.yaml and the slide images
    pub gallery_path: PathBuf,
    /// Display settings (start mode, auto-play cadence)
    pub display: DisplayConfig,
    /// Window settings
    pub window: WindowConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            gallery_path: vitrine_core::default_gallery_dir(),
            display: DisplayConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Visual variant shown at startup
    pub start_mode: DisplayMode,
    /// Milliseconds between fade carousel auto-advances
    pub auto_play_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            start_mode: DisplayMode::Images,
            auto_play_interval_ms: 4000,
        }
    }
}

impl DisplayConfig {
    /// Auto-play interval with the floor applied.
    pub fn auto_play_interval(&self) -> Duration {
        Duration::from_millis(self.auto_play_interval_ms.max(MIN_AUTO_PLAY_MS))
    }
}

/// Window configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1180.0,
            height: 1020.0,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/vitrine-gallery/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vitrine-gallery")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> GalleryConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return GalleryConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<GalleryConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - gallery: {:?}, start mode: {}, auto-play: {}ms",
                    config.gallery_path,
                    config.display.start_mode.label(),
                    config.display.auto_play_interval_ms
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                GalleryConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            GalleryConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &GalleryConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.display.start_mode, DisplayMode::Images);
        assert_eq!(config.display.auto_play_interval_ms, 4000);
    }

    #[test]
    fn test_auto_play_floor() {
        let display = DisplayConfig {
            start_mode: DisplayMode::Images,
            auto_play_interval_ms: 1,
        };
        assert_eq!(
            display.auto_play_interval(),
            Duration::from_millis(MIN_AUTO_PLAY_MS)
        );
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = GalleryConfig {
            gallery_path: PathBuf::from("/tmp/test-gallery"),
            display: DisplayConfig {
                start_mode: DisplayMode::Swatches,
                auto_play_interval_ms: 2500,
            },
            window: WindowConfig {
                width: 900.0,
                height: 700.0,
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: GalleryConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.gallery_path, PathBuf::from("/tmp/test-gallery"));
        assert_eq!(parsed.display.start_mode, DisplayMode::Swatches);
        assert_eq!(parsed.display.auto_play_interval_ms, 2500);
        assert_eq!(parsed.window.width, 900.0);
    }
}
