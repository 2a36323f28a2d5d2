use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;

/// Editor color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EditorTheme {
    #[default]
    SilverGold,
    Light,
    Dark,
    HighContrast,
}

impl EditorTheme {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SilverGold => "Silver & Gold",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark | Self::HighContrast)
    }

    /// The syntect theme key used for highlighting under this theme.
    pub fn syntax_theme_key(&self) -> &'static str {
        match self {
            Self::SilverGold => "InspiredGitHub",
            Self::Light => "base16-ocean.light",
            Self::Dark => "base16-ocean.dark",
            Self::HighContrast => "base16-mocha.dark",
        }
    }

    pub fn all() -> &'static [EditorTheme] {
        &[Self::SilverGold, Self::Light, Self::Dark, Self::HighContrast]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: EditorTheme,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_tab_size")]
    pub tab_size: u32,

    #[serde(default)]
    pub word_wrap: bool,

    #[serde(default = "default_line_numbers")]
    pub line_numbers: bool,

    #[serde(default = "default_minimap")]
    pub minimap: bool,

    #[serde(default)]
    pub auto_save: bool,
}

fn default_font_size() -> u32 {
    14
}

fn default_tab_size() -> u32 {
    2
}

fn default_line_numbers() -> bool {
    true
}

fn default_minimap() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: EditorTheme::default(),
            font_size: default_font_size(),
            tab_size: default_tab_size(),
            word_wrap: false,
            line_numbers: default_line_numbers(),
            minimap: default_minimap(),
            auto_save: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, merging over defaults. Missing or unknown
    /// keys keep their defaults; a corrupt file falls back entirely.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist yet; write defaults for next time
                let default = Self::default();
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Config file path (cross-platform).
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("codevault");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, EditorTheme::SilverGold);
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.tab_size, 2);
        assert!(!settings.word_wrap);
        assert!(settings.line_numbers);
        assert!(settings.minimap);
        assert!(!settings.auto_save);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config_merges_over_defaults() {
        let json = r#"{"font_size": 18, "word_wrap": true}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 18);
        assert!(settings.word_wrap);
        // Everything absent keeps its default
        assert_eq!(settings.theme, EditorTheme::SilverGold);
        assert_eq!(settings.tab_size, 2);
        assert!(settings.line_numbers);
    }

    #[test]
    fn test_theme_identifier_serialization() {
        let settings = AppSettings {
            theme: EditorTheme::HighContrast,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"high-contrast\""));

        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"silver-gold\""));
    }

    #[test]
    fn test_dark_themes() {
        assert!(!EditorTheme::SilverGold.is_dark());
        assert!(!EditorTheme::Light.is_dark());
        assert!(EditorTheme::Dark.is_dark());
        assert!(EditorTheme::HighContrast.is_dark());
    }
}
