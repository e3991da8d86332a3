//! Button styling for carousel controls
//!
//! Circular navigation buttons overlaying the slide surfaces, pagination
//! dots, thumbnail frames, and the header toggle, all as status-matched
//! style functions.

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow};

use crate::theme;

const NAV_BG: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.8);
const NAV_TEXT: Color = Color::from_rgb(0.15, 0.15, 0.17);
const THUMB_BORDER: Color = Color::from_rgb(0.35, 0.35, 0.4);

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r + factor).min(1.0),
        g: (color.g + factor).min(1.0),
        b: (color.b + factor).min(1.0),
        a: color.a,
    }
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * (1.0 - factor)).max(0.0),
        g: (color.g * (1.0 - factor)).max(0.0),
        b: (color.b * (1.0 - factor)).max(0.0),
        a: color.a,
    }
}

/// Circular previous/next button floating over the slide surface.
pub fn nav_style(status: Status) -> Style {
    let background = match status {
        Status::Hovered | Status::Pressed => Color { a: 1.0, ..NAV_BG },
        _ => NAV_BG,
    };
    Style {
        background: Some(Background::Color(background)),
        text_color: NAV_TEXT,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 22.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        snap: false,
    }
}

/// Pagination dot; the active dot is filled solid.
pub fn dot_style(status: Status, is_active: bool, size: f32) -> Style {
    let fill = if is_active {
        Color::WHITE
    } else {
        match status {
            Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.75),
            _ => theme::DOT_INACTIVE,
        }
    };
    Style {
        background: Some(Background::Color(fill)),
        text_color: Color::TRANSPARENT,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: (size / 2.0).into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Thumbnail frame; the active slide gets an accent border.
pub fn thumb_style(status: Status, is_active: bool, accent: Color) -> Style {
    let border_color = if is_active {
        accent
    } else {
        match status {
            Status::Hovered => lighten(THUMB_BORDER, 0.15),
            _ => THUMB_BORDER,
        }
    };
    Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Color::WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Header display-mode toggle button.
pub fn toggle_style(status: Status, accent: Color) -> Style {
    let background = match status {
        Status::Hovered => lighten(accent, 0.06),
        Status::Pressed => darken(accent, 0.12),
        _ => accent,
    };
    Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_darken_clamp() {
        let white = lighten(Color::WHITE, 0.5);
        assert_eq!(white.r, 1.0);
        let black = darken(Color::BLACK, 0.5);
        assert_eq!(black.r, 0.0);
    }

    #[test]
    fn test_active_dot_is_solid() {
        let style = dot_style(Status::Active, true, 12.0);
        assert_eq!(style.background, Some(Background::Color(Color::WHITE)));
    }
}
