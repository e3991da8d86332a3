//! Shared visual constants for the carousel widgets
//!
//! Hex parsing lives here because the swatch gradients arrive from the
//! core as hex strings; the application's theme file reuses it.

use iced::Color;

/// Height of every slide surface.
pub const SURFACE_HEIGHT: f32 = 420.0;

/// Backdrop behind slides and missing images.
pub const SURFACE_BACKDROP: Color = Color::from_rgb(0.11, 0.11, 0.13);

/// Caption scrim at the bottom of image slides.
pub const CAPTION_SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);

/// Caption scrim height.
pub const CAPTION_HEIGHT: f32 = 116.0;

pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.88);
pub const TEXT_HINT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7);
pub const TEXT_DIMMED: Color = Color::from_rgb(0.55, 0.55, 0.6);

/// Inactive pagination dot fill.
pub const DOT_INACTIVE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.5);

/// Footer panel background under the drag carousel.
pub const FOOTER_BACKGROUND: Color = Color::from_rgb(0.15, 0.15, 0.17);

/// Parse a hex color string into an iced Color.
///
/// Supports "#RRGGBB" or "RRGGBB". Returns white on parse failure.
pub fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#FF0000");
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);

        let color = parse_hex_color("00FF00");
        assert_eq!(color.g, 1.0);
    }

    #[test]
    fn test_parse_hex_color_invalid_falls_back() {
        assert_eq!(parse_hex_color("nope"), Color::WHITE);
        assert_eq!(parse_hex_color("#12345"), Color::WHITE);
    }
}
