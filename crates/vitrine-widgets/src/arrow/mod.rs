//! Arrow-navigation carousel
//!
//! A horizontal strip of slides with previous/next buttons and pagination
//! dots. Every index change tweens the strip offset over 500 ms.

mod canvas;
mod message;
mod state;
mod view;

pub use message::ArrowMessage;
pub use state::{ArrowState, SLIDE_TRANSITION};
pub use view::arrow_carousel;
