//! Draw-only canvas program for the sliding strip

use iced::mouse;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Rectangle, Renderer, Theme};

use vitrine_core::SlideSet;

use crate::images::SlideImages;
use crate::surface;

/// Slides laid out horizontally at the state's animated offset.
pub struct StripCanvas<'a> {
    pub slides: &'a SlideSet,
    pub images: &'a SlideImages,
    pub offset: f32,
}

impl<Message> Program<Message> for StripCanvas<'_> {
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
        surface::draw_strip(
            &mut frame,
            bounds.size(),
            self.slides,
            self.images,
            self.offset,
            None,
        );
        vec![frame.into_geometry()]
    }
}
