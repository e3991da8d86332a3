//! Auto-playing fade carousel
//!
//! Stacked slides cross-faded by opacity. A recurring timer advances the
//! active slide; manual controls and a thumbnail strip navigate directly.
//! Index changes commit after a fixed delay guarded by a token, so a newer
//! request silently cancels an older in-flight one.

mod canvas;
mod message;
mod state;
mod view;

pub use message::FadeMessage;
pub use state::{
    FadeState, TransitionToken, DEFAULT_AUTO_PLAY_INTERVAL, FADE_COMMIT_DELAY, FADE_TRANSITION,
};
pub use view::fade_carousel;
