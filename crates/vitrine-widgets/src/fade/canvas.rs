//! Draw-only canvas program for the cross-faded slide stack

use iced::mouse;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Point, Rectangle, Renderer, Theme};

use vitrine_core::SlideSet;

use crate::images::SlideImages;
use crate::surface;
use crate::theme;

use super::state::FadeState;

/// Every slide occupies the full surface; visibility comes from the
/// state's per-position opacity.
pub struct FadeSurface<'a> {
    pub state: &'a FadeState,
    pub slides: &'a SlideSet,
    pub images: &'a SlideImages,
}

impl<Message> Program<Message> for FadeSurface<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::SURFACE_BACKDROP);

        let area = Rectangle::new(Point::ORIGIN, bounds.size());
        for (position, item) in self.slides.iter().enumerate() {
            let opacity = self.state.opacity_of(position);
            surface::draw_slide(&mut frame, area, item, self.images, opacity, None);
        }

        vec![frame.into_geometry()]
    }
}
