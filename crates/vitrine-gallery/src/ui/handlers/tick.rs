//! Frame tick handler advancing transition animation
//!
//! The tick subscription only exists while some carousel reports
//! `is_animating()`, so idle frames cost nothing.

use iced::Task;

use vitrine_widgets::TICK_INTERVAL;

use crate::ui::app::{GalleryApp, Message};

/// Advance every running transition by one frame.
pub fn handle(app: &mut GalleryApp) -> Task<Message> {
    if let Some(stage) = app.stage_mut() {
        stage.arrow.tick(TICK_INTERVAL);
        stage.drag.tick(TICK_INTERVAL);
        stage.fade.tick(TICK_INTERVAL);
    }

    Task::none()
}
