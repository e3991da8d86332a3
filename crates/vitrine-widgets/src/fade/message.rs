//! Control and timing messages for the fade carousel

use super::state::TransitionToken;

/// Navigation, auto-play, and deferred-commit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeMessage {
    /// Advance one slide (wraps).
    Next,
    /// Retreat one slide (wraps).
    Previous,
    /// Thumbnail strip selection.
    Select(usize),
    /// The recurring auto-play timer fired.
    AutoPlay,
    /// A scheduled commit delay elapsed.
    Commit(TransitionToken),
}
