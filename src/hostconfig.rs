//! Subset of the host configuration consumed during rendering: the container
//! style palettes and their foreground color tables. Every struct carries the
//! stock colors as its `Default`, so a card renders without any config file.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub container_styles: ContainerStyles,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContainerStyles {
    #[serde(rename = "default")]
    pub default_palette: ContainerStyleConfig,
    #[serde(rename = "emphasis")]
    pub emphasis_palette: ContainerStyleConfig,
}

impl Default for ContainerStyles {
    fn default() -> Self {
        Self {
            default_palette: ContainerStyleConfig::default(),
            emphasis_palette: ContainerStyleConfig {
                background_color: "#08000000".to_string(),
                ..ContainerStyleConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyleConfig {
    pub background_color: String,
    pub foreground_colors: ForegroundColorsConfig,
}

impl Default for ContainerStyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFFFF".to_string(),
            foreground_colors: ForegroundColorsConfig::default(),
        }
    }
}

/// Per-token color table: one entry per named foreground color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForegroundColorsConfig {
    #[serde(rename = "default")]
    pub default_color: ColorConfig,
    pub accent: ColorConfig,
    pub good: ColorConfig,
    pub warning: ColorConfig,
    pub attention: ColorConfig,
    pub dark: ColorConfig,
    pub light: ColorConfig,
}

impl Default for ForegroundColorsConfig {
    fn default() -> Self {
        Self {
            default_color: ColorConfig::with_colors("#FF000000", "#B2000000"),
            accent: ColorConfig::with_colors("#FF0063B1", "#B20063B1"),
            good: ColorConfig::with_colors("#FF54A254", "#DD54A254"),
            warning: ColorConfig::with_colors("#FFE69500", "#DDE69500"),
            attention: ColorConfig::with_colors("#FFFF0000", "#DDFF0000"),
            dark: ColorConfig::with_colors("#FF000000", "#B2000000"),
            light: ColorConfig::with_colors("#FFFFFFFF", "#B2FFFFFF"),
        }
    }
}

/// Colors for one token: a plain pair plus a highlight pair, each with a
/// default and a subtle variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    #[serde(rename = "default")]
    pub default_color: String,
    #[serde(rename = "subtle")]
    pub subtle_color: String,
    pub highlight_colors: HighlightConfig,
}

impl ColorConfig {
    fn with_colors(default_color: &str, subtle_color: &str) -> Self {
        Self {
            default_color: default_color.to_string(),
            subtle_color: subtle_color.to_string(),
            highlight_colors: HighlightConfig::default(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::with_colors("#FF000000", "#B2000000")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    #[serde(rename = "default")]
    pub default_color: String,
    #[serde(rename = "subtle")]
    pub subtle_color: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            default_color: "#FFFFEE58".to_string(),
            subtle_color: "#B2FFEE58".to_string(),
        }
    }
}
