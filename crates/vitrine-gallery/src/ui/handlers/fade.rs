//! Fade carousel handler: navigation requests and deferred commits
//!
//! Requests issue a commit token; the index change runs after a fixed
//! delay. A newer request supersedes the pending one, so a stale token's
//! commit is a silent no-op.

use iced::Task;

use vitrine_widgets::{FadeMessage, TransitionToken, FADE_COMMIT_DELAY};

use crate::ui::app::{GalleryApp, Message};

/// Handle fade carousel navigation, auto-play, and commits.
pub fn handle(app: &mut GalleryApp, msg: FadeMessage) -> Task<Message> {
    let Some(stage) = app.stage_mut() else {
        return Task::none();
    };

    match msg {
        FadeMessage::Next => schedule_commit(stage.fade.next()),
        FadeMessage::Previous => schedule_commit(stage.fade.previous()),
        FadeMessage::Select(index) => schedule_commit(stage.fade.go_to(index)),
        FadeMessage::AutoPlay => schedule_commit(stage.fade.auto_advance()),
        FadeMessage::Commit(token) => {
            if !stage.fade.commit(token) {
                log::debug!("Ignoring superseded fade commit");
            }
            Task::none()
        }
    }
}

/// Schedule the deferred index commit for a freshly issued token.
fn schedule_commit(token: Option<TransitionToken>) -> Task<Message> {
    match token {
        Some(token) => Task::perform(tokio::time::sleep(FADE_COMMIT_DELAY), move |_| {
            Message::Fade(FadeMessage::Commit(token))
        }),
        None => Task::none(),
    }
}
