//! Interactive canvas program for the drag carousel surface
//!
//! Translates mouse and touch input into gesture messages. Window-space
//! coordinates are used throughout a gesture, so moves and the release are
//! still observed after the pointer leaves the widget bounds; the widget's
//! measured width travels with the release for thresholding.

use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, Event, Frame, Geometry, Program};
use iced::{Rectangle, Renderer, Theme};

use vitrine_core::SlideSet;

use crate::images::SlideImages;
use crate::surface;

use super::message::DragMessage;
use super::state::DragState;

/// Tracks which pointer started the live gesture; mouse gestures leave the
/// finger unset so stray touch events can't end them (and vice versa).
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracking {
    finger: Option<touch::Finger>,
}

/// Draws the strip at the gesture-driven offset and publishes gesture
/// messages through `on_gesture`.
pub struct DragCanvas<'a, Message, F>
where
    F: Fn(DragMessage) -> Message,
{
    pub state: &'a DragState,
    pub slides: &'a SlideSet,
    pub images: &'a SlideImages,
    pub hint: &'a str,
    pub on_gesture: F,
}

impl<Message, F> Program<Message> for DragCanvas<'_, Message, F>
where
    Message: Clone,
    F: Fn(DragMessage) -> Message,
{
    type State = GestureTracking;

    fn update(
        &self,
        tracking: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if !self.state.is_dragging() && cursor.position_in(bounds).is_some() {
                    let position = cursor.position()?;
                    tracking.finger = None;
                    return Some(canvas::Action::publish((self.on_gesture)(
                        DragMessage::GestureStarted(position.x),
                    )));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.state.is_dragging() && tracking.finger.is_none() {
                    return Some(canvas::Action::publish((self.on_gesture)(
                        DragMessage::GestureMoved(position.x),
                    )));
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.state.is_dragging() && tracking.finger.is_none() {
                    return Some(canvas::Action::publish((self.on_gesture)(
                        DragMessage::GestureEnded(bounds.width),
                    )));
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                // Only the primary finger drives the gesture.
                if !self.state.is_dragging() && bounds.contains(*position) {
                    tracking.finger = Some(*id);
                    return Some(canvas::Action::publish((self.on_gesture)(
                        DragMessage::GestureStarted(position.x),
                    )));
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if self.state.is_dragging() && tracking.finger == Some(*id) {
                    return Some(canvas::Action::publish((self.on_gesture)(
                        DragMessage::GestureMoved(position.x),
                    )));
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if tracking.finger == Some(*id) {
                    tracking.finger = None;
                    if self.state.is_dragging() {
                        return Some(canvas::Action::publish((self.on_gesture)(
                            DragMessage::GestureEnded(bounds.width),
                        )));
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        _tracking: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _tracking: &Self::State,
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
            self.state.offset(bounds.width),
            Some(self.hint),
        );
        vec![frame.into_geometry()]
    }
}
