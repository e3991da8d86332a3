//! Carousel widgets for the vitrine gallery viewer
//!
//! Reusable iced widgets for slide presentation. Three carousels share one
//! slide data contract and one drawing module:
//!
//! - **Arrow**: horizontal strip with previous/next buttons and pagination
//!   dots, sliding on a 500 ms tween
//! - **Drag**: the same strip driven 1:1 by pointer gestures, with a
//!   release threshold at 20% of the surface width
//! - **Fade**: stacked slides cross-faded by opacity, with timed auto-play
//!   and a thumbnail strip
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: pure navigation state machines, unit tested
//!   without a GUI (`ArrowState`, `DragState`, `FadeState`)
//! - **View functions**: take state + a message mapper, return `Element`
//! - **Canvas programs**: draw the slide surfaces and translate pointer
//!   events into gesture messages

pub mod animation;
pub mod arrow;
pub mod button_styles;
pub mod drag;
pub mod fade;
pub mod images;
pub mod surface;
pub mod theme;

// Re-export commonly used items
pub use animation::{ease_in_out, ease_out, Tween, TICK_INTERVAL};
pub use arrow::{arrow_carousel, ArrowMessage, ArrowState, SLIDE_TRANSITION};
pub use drag::{drag_carousel, DragMessage, DragState, DRAG_THRESHOLD_RATIO, SNAP_TRANSITION};
pub use fade::{
    fade_carousel, FadeMessage, FadeState, TransitionToken, DEFAULT_AUTO_PLAY_INTERVAL,
    FADE_COMMIT_DELAY, FADE_TRANSITION,
};
pub use images::SlideImages;
