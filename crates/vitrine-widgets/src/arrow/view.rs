//! View function for the arrow carousel

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, canvas, container, row, stack, text, Space};
use iced::{Element, Length};

use vitrine_core::SlideSet;

use crate::button_styles;
use crate::images::SlideImages;
use crate::theme;

use super::canvas::StripCanvas;
use super::{ArrowMessage, ArrowState};

const DOT_SIZE: f32 = 11.0;
const DOT_SIZE_ACTIVE: f32 = 14.0;

/// Build the arrow carousel: slide strip, overlay arrows, pagination dots.
pub fn arrow_carousel<'a, Message>(
    state: &'a ArrowState,
    slides: &'a SlideSet,
    images: &'a SlideImages,
    on_message: impl Fn(ArrowMessage) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let strip = canvas(StripCanvas {
        slides,
        images,
        offset: state.offset(),
    })
    .width(Length::Fill)
    .height(Length::Fixed(theme::SURFACE_HEIGHT));

    let previous = button(text("‹").size(26))
        .padding([2, 16])
        .style(|_, status| button_styles::nav_style(status))
        .on_press(on_message(ArrowMessage::Previous));

    let next = button(text("›").size(26))
        .padding([2, 16])
        .style(|_, status| button_styles::nav_style(status))
        .on_press(on_message(ArrowMessage::Next));

    let mut dots = row![].spacing(8);
    for index in 0..slides.len() {
        let is_active = index == state.current();
        let size = if is_active { DOT_SIZE_ACTIVE } else { DOT_SIZE };
        dots = dots.push(
            button(
                Space::new()
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size)),
            )
            .padding(0)
            .style(move |_, status| button_styles::dot_style(status, is_active, size))
            .on_press(on_message(ArrowMessage::Select(index))),
        );
    }

    stack![
        strip,
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
        container(dots)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(16),
    ]
    .width(Length::Fill)
    .height(Length::Fixed(theme::SURFACE_HEIGHT))
    .into()
}
