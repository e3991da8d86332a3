//! View function for the fade carousel

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, column, container, image, row, stack, text};
use iced::{Color, ContentFit, Element, Length};

use vitrine_core::{SlideSet, Visual};

use crate::button_styles;
use crate::images::SlideImages;
use crate::theme;

use super::canvas::FadeSurface;
use super::{FadeMessage, FadeState};

const THUMB_WIDTH: f32 = 72.0;
const THUMB_HEIGHT: f32 = 48.0;

/// Build the fade carousel: cross-faded stack, overlay controls, auto-play
/// badge, and the thumbnail strip.
pub fn fade_carousel<'a, Message>(
    state: &'a FadeState,
    slides: &'a SlideSet,
    images: &'a SlideImages,
    accent: Color,
    on_message: impl Fn(FadeMessage) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let surface = canvas(FadeSurface {
        state,
        slides,
        images,
    })
    .width(Length::Fill)
    .height(Length::Fixed(theme::SURFACE_HEIGHT));

    let previous = button(text("‹").size(26))
        .padding([2, 16])
        .style(|_, status| button_styles::nav_style(status))
        .on_press(on_message(FadeMessage::Previous));

    let next = button(text("›").size(26))
        .padding([2, 16])
        .style(|_, status| button_styles::nav_style(status))
        .on_press(on_message(FadeMessage::Next));

    let badge = container(text("Auto-play").size(12).color(theme::TEXT_PRIMARY))
        .padding([4, 12])
        .style(|_| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
            border: iced::Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut thumbs = row![].spacing(10);
    for (index, item) in slides.iter().enumerate() {
        let is_active = index == state.current();
        thumbs = thumbs.push(
            button(thumbnail(item, index, images))
                .padding(2)
                .style(move |_, status| button_styles::thumb_style(status, is_active, accent))
                .on_press(on_message(FadeMessage::Select(index))),
        );
    }

    let strip = container(thumbs)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(12)
        .style(|_| container::Style {
            background: Some(theme::FOOTER_BACKGROUND.into()),
            ..Default::default()
        });

    let surface_stack = stack![
        surface,
        container(previous)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .padding(14),
        container(next)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .padding(14),
        container(badge)
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(14),
    ]
    .width(Length::Fill)
    .height(Length::Fixed(theme::SURFACE_HEIGHT));

    column![surface_stack, strip].width(Length::Fill).into()
}

/// Thumbnail content: the slide's image when available, otherwise its
/// slide number over the swatch color (or the backdrop).
fn thumbnail<'a, Message>(
    item: &'a vitrine_core::SlideItem,
    index: usize,
    images: &'a SlideImages,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    if let Visual::Image { .. } = &item.visual {
        if let Some(handle) = images.get(item.id) {
            return image(handle.clone())
                .width(Length::Fixed(THUMB_WIDTH))
                .height(Length::Fixed(THUMB_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into();
        }
    }

    let fill = match &item.visual {
        Visual::Swatch { style } => theme::parse_hex_color(&style.start),
        Visual::Image { .. } => theme::SURFACE_BACKDROP,
    };

    container(
        text(format!("{}", index + 1))
            .size(16)
            .color(theme::TEXT_PRIMARY),
    )
    .center_x(Length::Fixed(THUMB_WIDTH))
    .center_y(Length::Fixed(THUMB_HEIGHT))
    .style(move |_| container::Style {
        background: Some(fill.into()),
        ..Default::default()
    })
    .into()
}
