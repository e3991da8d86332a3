//! UI module for the vitrine gallery viewer
//!
//! Built with iced using a message-passing architecture; the carousels
//! themselves come from `vitrine-widgets`.

pub mod app;
pub mod handlers;
pub mod theme;

pub use app::GalleryApp;
