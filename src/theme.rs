use std::fmt;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color::shift_lightness;

/// Theme presets offered in the selector.
pub const KNOWN_THEMES: [&str; 7] = [
    "plotly",
    "plotly_white",
    "plotly_dark",
    "ggplot2",
    "seaborn",
    "simple_white",
    "neon",
];

pub const DEFAULT_THEME: &str = "neon";

// ---------------------------------------------------------------------------
// ThemeName – opaque identifier carried by chart specs
// ---------------------------------------------------------------------------

/// A chart theme identifier. Charts carry it verbatim; only the renderer
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeName(pub String);

impl ThemeName {
    pub fn new(name: impl Into<String>) -> Self {
        ThemeName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        ThemeName::new(DEFAULT_THEME)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ThemeStyle – how the renderer paints a theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub background: Color32,
    pub grid: Color32,
    pub text: Color32,
    pub marker_radius: f32,
    /// Draw a translucent halo behind each marker.
    pub glow: bool,
    /// Darken species colours so they read on light backgrounds.
    pub darken_markers: bool,
}

impl ThemeStyle {
    /// Map a theme name to concrete colours. Unknown names fall back to `plotly`.
    pub fn resolve(theme: &ThemeName) -> ThemeStyle {
        match theme.as_str() {
            "plotly" => ThemeStyle {
                background: Color32::from_rgb(229, 236, 246),
                grid: Color32::WHITE,
                text: Color32::from_rgb(42, 63, 95),
                marker_radius: 3.5,
                glow: false,
                darken_markers: true,
            },
            "plotly_white" => ThemeStyle {
                background: Color32::WHITE,
                grid: Color32::from_rgb(235, 240, 248),
                text: Color32::from_rgb(42, 63, 95),
                marker_radius: 3.5,
                glow: false,
                darken_markers: true,
            },
            "plotly_dark" => ThemeStyle {
                background: Color32::from_rgb(17, 17, 17),
                grid: Color32::from_rgb(40, 52, 66),
                text: Color32::from_rgb(242, 245, 250),
                marker_radius: 3.5,
                glow: false,
                darken_markers: false,
            },
            "ggplot2" => ThemeStyle {
                background: Color32::from_rgb(235, 235, 235),
                grid: Color32::WHITE,
                text: Color32::from_rgb(51, 51, 51),
                marker_radius: 3.0,
                glow: false,
                darken_markers: true,
            },
            "seaborn" => ThemeStyle {
                background: Color32::from_rgb(234, 234, 242),
                grid: Color32::WHITE,
                text: Color32::from_rgb(36, 36, 36),
                marker_radius: 3.0,
                glow: false,
                darken_markers: true,
            },
            "simple_white" => ThemeStyle {
                background: Color32::WHITE,
                grid: Color32::from_rgb(250, 250, 250),
                text: Color32::from_rgb(36, 36, 36),
                marker_radius: 3.0,
                glow: false,
                darken_markers: true,
            },
            "neon" => ThemeStyle {
                background: Color32::from_rgb(10, 10, 10),
                grid: Color32::from_rgba_unmultiplied(255, 255, 255, 25),
                text: Color32::from_rgb(160, 160, 160),
                marker_radius: 5.0,
                glow: true,
                darken_markers: false,
            },
            other => {
                log::warn!("Unknown theme '{other}', using plotly styling");
                ThemeStyle::resolve(&ThemeName::new("plotly"))
            }
        }
    }

    /// Marker colour for a species colour under this theme.
    pub fn marker_color(&self, base: Color32) -> Color32 {
        if self.darken_markers {
            shift_lightness(base, -0.15)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_theme_has_its_own_style() {
        let plotly = ThemeStyle::resolve(&ThemeName::new("plotly"));
        for name in KNOWN_THEMES.iter().filter(|n| **n != "plotly") {
            let style = ThemeStyle::resolve(&ThemeName::new(*name));
            assert_ne!(style, plotly, "{name} should not fall back");
        }
    }

    #[test]
    fn unknown_theme_falls_back_to_plotly() {
        assert_eq!(
            ThemeStyle::resolve(&ThemeName::new("vaporwave")),
            ThemeStyle::resolve(&ThemeName::new("plotly"))
        );
    }

    #[test]
    fn theme_name_serialises_as_plain_string() {
        let json = serde_json::to_string(&ThemeName::new("ggplot2")).unwrap();
        assert_eq!(json, "\"ggplot2\"");
    }
}
