//! Arrow carousel message handler

use iced::Task;

use vitrine_widgets::ArrowMessage;

use crate::ui::app::{GalleryApp, Message};

/// Handle arrow carousel navigation.
pub fn handle(app: &mut GalleryApp, msg: ArrowMessage) -> Task<Message> {
    let Some(stage) = app.stage_mut() else {
        return Task::none();
    };

    match msg {
        ArrowMessage::Next => stage.arrow.next(),
        ArrowMessage::Previous => stage.arrow.previous(),
        ArrowMessage::Select(index) => stage.arrow.go_to(index),
    }

    Task::none()
}
