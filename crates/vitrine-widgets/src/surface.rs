//! Shared slide drawing for the carousel canvas programs
//!
//! Image slides draw the decoded image (when its file was found) under a
//! caption scrim; swatch slides draw a two-stop linear gradient with
//! centered caption text. A slide whose image is missing keeps its caption
//! over the backdrop.

use std::f32::consts::FRAC_PI_2;

use iced::advanced::graphics::core::Image as CoreImage;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{gradient, Frame, Text};
use iced::{Color, Font, Point, Radians, Rectangle, Size};

use vitrine_core::{SlideItem, SlideSet, SwatchStyle, Visual};

use crate::images::SlideImages;
use crate::theme;

const TITLE_SIZE: f32 = 26.0;
const DESCRIPTION_SIZE: f32 = 15.0;
const HINT_SIZE: f32 = 13.0;
const CAPTION_INSET: f32 = 28.0;

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Scale a color's alpha for cross-fading.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Draw one slide into `area`, faded to `opacity`.
pub fn draw_slide(
    frame: &mut Frame,
    area: Rectangle,
    item: &SlideItem,
    images: &SlideImages,
    opacity: f32,
    hint: Option<&str>,
) {
    if opacity <= f32::EPSILON {
        return;
    }

    match &item.visual {
        Visual::Image { .. } => draw_image_slide(frame, area, item, images, opacity, hint),
        Visual::Swatch { style } => draw_swatch_slide(frame, area, item, style, opacity, hint),
    }
}

/// Draw the horizontal strip shared by the arrow and drag carousels:
/// every slide whose position intersects the viewport, laid out at
/// `(position - offset)` slide widths.
pub fn draw_strip(
    frame: &mut Frame,
    size: Size,
    slides: &SlideSet,
    images: &SlideImages,
    offset: f32,
    hint: Option<&str>,
) {
    frame.fill_rectangle(Point::ORIGIN, size, theme::SURFACE_BACKDROP);

    let width = size.width;
    for (position, item) in slides.iter().enumerate() {
        let x = (position as f32 - offset) * width;
        if x + width <= 0.0 || x >= width {
            continue;
        }
        let area = Rectangle::new(Point::new(x, 0.0), size);
        draw_slide(frame, area, item, images, 1.0, hint);
    }
}

fn draw_image_slide(
    frame: &mut Frame,
    area: Rectangle,
    item: &SlideItem,
    images: &SlideImages,
    opacity: f32,
    hint: Option<&str>,
) {
    frame.fill_rectangle(
        area.position(),
        area.size(),
        faded(theme::SURFACE_BACKDROP, opacity),
    );

    // Missing image: no visual, caption stays.
    if let Some(handle) = images.get(item.id) {
        frame.draw_image(area, CoreImage::new(handle.clone()).opacity(opacity));
    }

    let scrim_top = area.y + area.height - theme::CAPTION_HEIGHT;
    frame.fill_rectangle(
        Point::new(area.x, scrim_top),
        Size::new(area.width, theme::CAPTION_HEIGHT),
        faded(theme::CAPTION_SCRIM, opacity),
    );

    let left = area.x + CAPTION_INSET;
    frame.fill_text(Text {
        content: item.title.clone(),
        position: Point::new(left, scrim_top + 16.0),
        size: TITLE_SIZE.into(),
        color: faded(theme::TEXT_PRIMARY, opacity),
        font: BOLD,
        align_x: Horizontal::Left.into(),
        align_y: Vertical::Top.into(),
        ..Text::default()
    });
    frame.fill_text(Text {
        content: item.description.clone(),
        position: Point::new(left, scrim_top + 52.0),
        size: DESCRIPTION_SIZE.into(),
        color: faded(theme::TEXT_SECONDARY, opacity),
        align_x: Horizontal::Left.into(),
        align_y: Vertical::Top.into(),
        ..Text::default()
    });
    if let Some(hint) = hint {
        frame.fill_text(Text {
            content: hint.to_string(),
            position: Point::new(left, scrim_top + 82.0),
            size: HINT_SIZE.into(),
            color: faded(theme::TEXT_HINT, opacity),
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Top.into(),
            ..Text::default()
        });
    }
}

fn draw_swatch_slide(
    frame: &mut Frame,
    area: Rectangle,
    item: &SlideItem,
    style: &SwatchStyle,
    opacity: f32,
    hint: Option<&str>,
) {
    let start = theme::parse_hex_color(&style.start);
    let end = theme::parse_hex_color(&style.end);
    let (gradient_start, gradient_end) = Radians(FRAC_PI_2).to_distance(&area);
    let linear = gradient::Linear::new(gradient_start, gradient_end)
        .add_stop(0.0, faded(start, opacity))
        .add_stop(1.0, faded(end, opacity));
    frame.fill_rectangle(area.position(), area.size(), linear);

    let center_x = area.x + area.width / 2.0;
    let center_y = area.y + area.height / 2.0;
    frame.fill_text(Text {
        content: item.title.clone(),
        position: Point::new(center_x, center_y - 34.0),
        size: 32.0.into(),
        color: faded(theme::TEXT_PRIMARY, opacity),
        font: BOLD,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });
    frame.fill_text(Text {
        content: item.description.clone(),
        position: Point::new(center_x, center_y + 8.0),
        size: 17.0.into(),
        color: faded(theme::TEXT_SECONDARY, opacity),
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });
    if let Some(hint) = hint {
        frame.fill_text(Text {
            content: hint.to_string(),
            position: Point::new(center_x, center_y + 44.0),
            size: HINT_SIZE.into(),
            color: faded(theme::TEXT_HINT, opacity),
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });
    }
}
