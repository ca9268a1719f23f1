//! Configuration file support
//!
//! Loads `~/.config/filmstrip/config.toml` (TOML). The `[gallery]` section
//! holds the startup roster; `[tui]` selects the theme. A missing file
//! yields defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilmstripConfig {
    pub gallery: GalleryConfig,
    pub tui: TuiConfig,
}

/// Startup roster: photo names inserted in order when the TUI launches.
/// Input only; the gallery is never written back here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub theme: TuiTheme,
}

/// Theme selection as stored in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuiTheme {
    #[default]
    CatppuccinMocha,
    CatppuccinLatte,
    Dracula,
    Nord,
    Custom,
}

impl FilmstripConfig {
    /// Configuration directory (`~/.config/filmstrip` on Linux)
    pub fn config_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "filmstrip")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().to_path_buf())
    }

    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path (the `--config` override)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FilmstripConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.gallery.photos.is_empty());
        assert_eq!(config.tui.theme, TuiTheme::CatppuccinMocha);
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[gallery]
photos = ["sunset", "beach"]

[tui]
theme = "dracula"
"#,
        )
        .unwrap();

        let config = FilmstripConfig::load_from(&path).unwrap();
        assert_eq!(config.gallery.photos, ["sunset", "beach"]);
        assert_eq!(config.tui.theme, TuiTheme::Dracula);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gallery]\nphotos = [\"one\"]\n").unwrap();

        let config = FilmstripConfig::load_from(&path).unwrap();
        assert_eq!(config.gallery.photos, ["one"]);
        assert_eq!(config.tui.theme, TuiTheme::CatppuccinMocha);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FilmstripConfig {
            gallery: GalleryConfig {
                photos: vec!["a".to_string(), "b".to_string()],
            },
            tui: TuiConfig {
                theme: TuiTheme::Nord,
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: FilmstripConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.gallery.photos, config.gallery.photos);
        assert_eq!(parsed.tui.theme, TuiTheme::Nord);
    }

    #[test]
    fn test_invalid_theme_name_is_rejected() {
        let result: Result<FilmstripConfig, _> = toml::from_str("[tui]\ntheme = \"neon\"\n");
        assert!(result.is_err());
    }
}
