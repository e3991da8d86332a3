//! Theme configuration for the gallery viewer
//!
//! Accent and chrome colors are configurable as YAML in the user's config
//! directory. Default location: ~/.config/vitrine-gallery/theme.yaml

use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use vitrine_widgets::theme::parse_hex_color;

/// Global theme instance (initialized once at startup)
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Accent used when no theme file is installed (matches "#3B82F6").
pub const DEFAULT_ACCENT: Color = Color::from_rgb(0.231, 0.51, 0.965);

/// Window background used when no theme file is installed.
pub const DEFAULT_BACKGROUND: Color = Color::from_rgb(0.078, 0.078, 0.09);

/// Root theme configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Chrome colors for controls and the window background
    pub colors: ChromeColors,
}

/// Chrome color configuration
///
/// Colors are specified as hex strings (e.g., "#3B82F6")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeColors {
    /// Accent for active dots, thumbnail borders, and the toggle button
    pub accent: String,
    /// Window background behind the carousel sections
    pub background: String,
}

impl Default for ChromeColors {
    fn default() -> Self {
        Self {
            accent: "#3B82F6".to_string(),
            background: "#141417".to_string(),
        }
    }
}

impl ChromeColors {
    pub fn accent_color(&self) -> Color {
        parse_hex_color(&self.accent)
    }

    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background)
    }
}

/// Get the default theme file path
///
/// Returns: ~/.config/vitrine-gallery/theme.yaml
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vitrine-gallery")
        .join("theme.yaml")
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_theme(path: &Path) -> ThemeConfig {
    if !path.exists() {
        log::info!("load_theme: Theme file doesn't exist, using defaults");
        return ThemeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_theme: Loaded theme - accent: {}, background: {}",
                    config.colors.accent,
                    config.colors.background
                );
                config
            }
            Err(e) => {
                log::warn!("load_theme: Failed to parse theme: {}, using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_theme: Failed to read theme file: {}, using defaults", e);
            ThemeConfig::default()
        }
    }
}

/// Initialize the global theme from the theme file (call once at startup)
pub fn init_theme() {
    let path = default_theme_path();
    let config = load_theme(&path);
    if THEME.set(config).is_err() {
        log::warn!("Theme already initialized");
    }
}

/// Accent color for controls.
pub fn accent() -> Color {
    THEME
        .get()
        .map(|t| t.colors.accent_color())
        .unwrap_or(DEFAULT_ACCENT)
}

/// Window background color.
pub fn background() -> Color {
    THEME
        .get()
        .map(|t| t.colors.background_color())
        .unwrap_or(DEFAULT_BACKGROUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_parse() {
        let colors = ChromeColors::default();
        let accent = colors.accent_color();
        assert!(accent.b > accent.r);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ThemeConfig {
            colors: ChromeColors {
                accent: "#FF8800".to_string(),
                background: "#101010".to_string(),
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ThemeConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.colors.accent, "#FF8800");
        assert_eq!(parsed.colors.background, "#101010");
    }
}
