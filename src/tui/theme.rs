//! Color themes for the TUI
//!
//! Four built-in palettes plus an optional user-defined theme loaded from a
//! JSON file in the config directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::config::TuiTheme;

/// A complete color palette for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    // Base colors
    pub base: Color,     // Main background
    pub surface0: Color, // Highlighted rows, modal fill
    pub surface1: Color, // Borders, separators
    // Text colors
    pub text: Color,     // Primary text
    pub subtext0: Color, // Hints, dimmed text
    // Accent colors
    pub blue: Color,   // Current photo marker, input cursor
    pub green: Color,  // Success status
    pub yellow: Color, // Position readout, key hints
    pub red: Color,    // Error status
    pub mauve: Color,  // App title, photo names
    pub teal: Color,   // Locators
}

/// RGB color for JSON serialization
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Custom theme definition, read from `custom-theme.json` in the config
/// directory. Colors are RGB objects with r, g, b values (0-255).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTheme {
    pub base: RgbColor,
    pub surface0: RgbColor,
    pub surface1: RgbColor,
    pub text: RgbColor,
    pub subtext0: RgbColor,
    pub blue: RgbColor,
    pub green: RgbColor,
    pub yellow: RgbColor,
    pub red: RgbColor,
    pub mauve: RgbColor,
    pub teal: RgbColor,
}

impl CustomTheme {
    pub fn to_theme(&self) -> Theme {
        Theme {
            name: "Custom",
            base: self.base.to_color(),
            surface0: self.surface0.to_color(),
            surface1: self.surface1.to_color(),
            text: self.text.to_color(),
            subtext0: self.subtext0.to_color(),
            blue: self.blue.to_color(),
            green: self.green.to_color(),
            yellow: self.yellow.to_color(),
            red: self.red.to_color(),
            mauve: self.mauve.to_color(),
            teal: self.teal.to_color(),
        }
    }

    /// Location of the custom theme file
    pub fn file_path() -> Result<PathBuf> {
        crate::config::FilmstripConfig::config_dir().map(|d| d.join("custom-theme.json"))
    }

    pub fn exists() -> bool {
        Self::file_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load the custom theme from its file
    pub fn load() -> Result<Self> {
        let path = Self::file_path()?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read custom theme from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse custom theme from {}", path.display()))
    }
}

/// Selectable theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    CatppuccinMocha,
    CatppuccinLatte,
    Dracula,
    Nord,
    Custom,
}

impl ThemeVariant {
    /// Resolve the palette for this variant. `custom` is the theme loaded
    /// from disk at startup, if any; a missing custom theme falls back to
    /// the default palette.
    pub fn theme(&self, custom: Option<&Theme>) -> Theme {
        match self {
            Self::CatppuccinMocha => CATPPUCCIN_MOCHA,
            Self::CatppuccinLatte => CATPPUCCIN_LATTE,
            Self::Dracula => DRACULA,
            Self::Nord => NORD,
            Self::Custom => custom.copied().unwrap_or(CATPPUCCIN_MOCHA),
        }
    }

    /// Cycle to the next variant, skipping Custom unless one is loaded
    pub fn next(&self, has_custom: bool) -> Self {
        match self {
            Self::CatppuccinMocha => Self::CatppuccinLatte,
            Self::CatppuccinLatte => Self::Dracula,
            Self::Dracula => Self::Nord,
            Self::Nord => {
                if has_custom {
                    Self::Custom
                } else {
                    Self::CatppuccinMocha
                }
            }
            Self::Custom => Self::CatppuccinMocha,
        }
    }

    /// Parse a user-supplied theme name (CLI flag or `theme` command)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mocha" | "catppuccin-mocha" => Some(Self::CatppuccinMocha),
            "latte" | "catppuccin-latte" => Some(Self::CatppuccinLatte),
            "dracula" => Some(Self::Dracula),
            "nord" => Some(Self::Nord),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn from_config_theme(theme: TuiTheme) -> Self {
        match theme {
            TuiTheme::CatppuccinMocha => Self::CatppuccinMocha,
            TuiTheme::CatppuccinLatte => Self::CatppuccinLatte,
            TuiTheme::Dracula => Self::Dracula,
            TuiTheme::Nord => Self::Nord,
            TuiTheme::Custom => Self::Custom,
        }
    }

    pub fn all() -> &'static [ThemeVariant] {
        &[
            Self::CatppuccinMocha,
            Self::CatppuccinLatte,
            Self::Dracula,
            Self::Nord,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CatppuccinMocha => "Catppuccin Mocha",
            Self::CatppuccinLatte => "Catppuccin Latte",
            Self::Dracula => "Dracula",
            Self::Nord => "Nord",
            Self::Custom => "Custom",
        }
    }
}

/// Catppuccin Mocha - dark theme with warm pastels (default)
pub const CATPPUCCIN_MOCHA: Theme = Theme {
    name: "Catppuccin Mocha",
    base: Color::Rgb(30, 30, 46),
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
    teal: Color::Rgb(102, 178, 168),
};

/// Catppuccin Latte - light counterpart to Mocha
pub const CATPPUCCIN_LATTE: Theme = Theme {
    name: "Catppuccin Latte",
    base: Color::Rgb(239, 241, 245),
    surface0: Color::Rgb(220, 224, 232),
    surface1: Color::Rgb(188, 192, 204),
    text: Color::Rgb(76, 79, 105),
    subtext0: Color::Rgb(108, 111, 133),
    blue: Color::Rgb(30, 102, 245),
    green: Color::Rgb(64, 160, 43),
    yellow: Color::Rgb(223, 142, 29),
    red: Color::Rgb(210, 15, 57),
    mauve: Color::Rgb(136, 57, 239),
    teal: Color::Rgb(23, 146, 153),
};

/// Dracula - dark theme with vibrant colors
pub const DRACULA: Theme = Theme {
    name: "Dracula",
    base: Color::Rgb(40, 42, 54),
    surface0: Color::Rgb(68, 71, 90),
    surface1: Color::Rgb(98, 114, 164),
    text: Color::Rgb(248, 248, 242),
    subtext0: Color::Rgb(189, 147, 249),
    blue: Color::Rgb(139, 233, 253),
    green: Color::Rgb(80, 250, 123),
    yellow: Color::Rgb(241, 250, 140),
    red: Color::Rgb(255, 85, 85),
    mauve: Color::Rgb(189, 147, 249),
    teal: Color::Rgb(98, 168, 182),
};

/// Nord - arctic, bluish palette
pub const NORD: Theme = Theme {
    name: "Nord",
    base: Color::Rgb(46, 52, 64),
    surface0: Color::Rgb(59, 66, 82),
    surface1: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(216, 222, 233),
    blue: Color::Rgb(136, 192, 208),
    green: Color::Rgb(163, 190, 140),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    mauve: Color::Rgb(180, 142, 173),
    teal: Color::Rgb(143, 188, 187),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_theme_json_round_trip() {
        let json = r#"{
            "base": {"r": 10, "g": 20, "b": 30},
            "surface0": {"r": 1, "g": 2, "b": 3},
            "surface1": {"r": 4, "g": 5, "b": 6},
            "text": {"r": 250, "g": 250, "b": 250},
            "subtext0": {"r": 180, "g": 180, "b": 180},
            "blue": {"r": 0, "g": 0, "b": 255},
            "green": {"r": 0, "g": 255, "b": 0},
            "yellow": {"r": 255, "g": 255, "b": 0},
            "red": {"r": 255, "g": 0, "b": 0},
            "mauve": {"r": 128, "g": 0, "b": 128},
            "teal": {"r": 0, "g": 128, "b": 128}
        }"#;

        let custom: CustomTheme = serde_json::from_str(json).unwrap();
        let theme = custom.to_theme();
        assert_eq!(theme.name, "Custom");
        assert_eq!(theme.base, Color::Rgb(10, 20, 30));
        assert_eq!(theme.blue, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_cycle_skips_custom_when_absent() {
        let mut variant = ThemeVariant::CatppuccinMocha;
        for _ in 0..4 {
            variant = variant.next(false);
        }
        assert_eq!(variant, ThemeVariant::CatppuccinMocha);
    }

    #[test]
    fn test_cycle_visits_custom_when_present() {
        assert_eq!(ThemeVariant::Nord.next(true), ThemeVariant::Custom);
        assert_eq!(
            ThemeVariant::Custom.next(true),
            ThemeVariant::CatppuccinMocha
        );
    }

    #[test]
    fn test_from_name_accepts_short_and_full_names() {
        assert_eq!(
            ThemeVariant::from_name("mocha"),
            Some(ThemeVariant::CatppuccinMocha)
        );
        assert_eq!(
            ThemeVariant::from_name("Catppuccin-Latte"),
            Some(ThemeVariant::CatppuccinLatte)
        );
        assert_eq!(ThemeVariant::from_name("nord"), Some(ThemeVariant::Nord));
        assert_eq!(ThemeVariant::from_name("neon"), None);
    }

    #[test]
    fn test_custom_variant_falls_back_without_loaded_theme() {
        let theme = ThemeVariant::Custom.theme(None);
        assert_eq!(theme.name, CATPPUCCIN_MOCHA.name);
    }
}
