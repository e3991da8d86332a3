//! View function for the drag carousel

use iced::widget::{canvas, column, container, row, text, Space};
use iced::{Color, Element, Length};

use vitrine_core::SlideSet;

use crate::images::SlideImages;
use crate::theme;

use super::canvas::DragCanvas;
use super::{DragMessage, DragState};

const DRAG_HINT: &str = "← Drag or swipe to navigate →";
const DOT_SIZE: f32 = 8.0;

/// Build the drag carousel: gesture surface plus a progress footer with a
/// "Slide X of N" readout and display-only dots.
pub fn drag_carousel<'a, Message>(
    state: &'a DragState,
    slides: &'a SlideSet,
    images: &'a SlideImages,
    accent: Color,
    on_gesture: impl Fn(DragMessage) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let surface = canvas(DragCanvas {
        state,
        slides,
        images,
        hint: DRAG_HINT,
        on_gesture,
    })
    .width(Length::Fill)
    .height(Length::Fixed(theme::SURFACE_HEIGHT));

    let readout = text(format!(
        "Slide {} of {}",
        state.current() + 1,
        state.len()
    ))
    .size(13)
    .color(theme::TEXT_DIMMED);

    let mut dots = row![].spacing(5);
    for index in 0..slides.len() {
        let fill = if index == state.current() {
            accent
        } else {
            Color::from_rgb(0.3, 0.3, 0.34)
        };
        dots = dots.push(
            container(Space::new())
                .width(Length::Fixed(DOT_SIZE))
                .height(Length::Fixed(DOT_SIZE))
                .style(move |_| container::Style {
                    background: Some(fill.into()),
                    border: iced::Border {
                        radius: (DOT_SIZE / 2.0).into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }

    let footer = container(
        row![readout, Space::new().width(Length::Fill), dots].align_y(iced::Center),
    )
    .width(Length::Fill)
    .padding([10, 16])
    .style(|_| container::Style {
        background: Some(theme::FOOTER_BACKGROUND.into()),
        ..Default::default()
    });

    column![surface, footer].width(Length::Fill).into()
}
