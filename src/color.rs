use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Fixed species colours
// ---------------------------------------------------------------------------

/// Hex colour for each species. Fixed for the lifetime of the process.
pub fn species_hex(species: Species) -> &'static str {
    match species {
        Species::Setosa => "#FF00FF",
        Species::Versicolor => "#00FFFF",
        Species::Virginica => "#00FF00",
    }
}

pub fn species_color(species: Species) -> Color32 {
    hex_to_color32(species_hex(species)).unwrap_or(Color32::GRAY)
}

/// Parse `#RRGGBB` into a [`Color32`].
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

// ---------------------------------------------------------------------------
// Derived shades
// ---------------------------------------------------------------------------

/// Shift the HSL lightness of a colour by `delta` (clamped to [0, 1]).
pub fn shift_lightness(color: Color32, delta: f32) -> Color32 {
    let rgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
    let out: Srgb = hsl.into_color();
    Color32::from_rgb(
        (out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// Translucent halo drawn behind neon markers.
pub fn glow(color: Color32) -> Color32 {
    let light = shift_lightness(color, 0.15);
    Color32::from_rgba_unmultiplied(light.r(), light.g(), light.b(), 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_colours_are_distinct() {
        let colors: Vec<Color32> = Species::ALL.iter().map(|&s| species_color(s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
        assert_eq!(colors[0], Color32::from_rgb(255, 0, 255));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(hex_to_color32("FF00FF"), None);
        assert_eq!(hex_to_color32("#FF00F"), None);
        assert_eq!(hex_to_color32("#GG0000"), None);
    }

    #[test]
    fn darkening_reduces_brightness() {
        let base = Color32::from_rgb(0, 200, 200);
        let dark = shift_lightness(base, -0.2);
        assert!(dark.g() < base.g());
    }
}
