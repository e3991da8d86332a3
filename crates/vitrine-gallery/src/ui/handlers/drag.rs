//! Drag carousel gesture handler

use iced::Task;

use vitrine_widgets::DragMessage;

use crate::ui::app::{GalleryApp, Message};

/// Handle drag carousel gestures (mouse and touch reduced to one
/// horizontal coordinate by the surface).
pub fn handle(app: &mut GalleryApp, msg: DragMessage) -> Task<Message> {
    let Some(stage) = app.stage_mut() else {
        return Task::none();
    };

    match msg {
        DragMessage::GestureStarted(x) => stage.drag.begin_gesture(x),
        DragMessage::GestureMoved(x) => stage.drag.motion(x),
        DragMessage::GestureEnded(width) => stage.drag.release(width),
    }

    Task::none()
}
