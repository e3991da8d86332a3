//! Message handlers for GalleryApp
//!
//! Each handler module covers one message category. Handlers receive
//! `&mut GalleryApp` and return `Task<Message>`.

pub mod arrow;
pub mod drag;
pub mod fade;
pub mod tick;
