//! Image handle cache keyed by slide id
//!
//! Slides whose files were not found on disk simply have no entry; the
//! surface then renders the caption over the backdrop instead of an image
//! (a cosmetic degradation, not an error).

use std::collections::HashMap;

use iced::widget::image::Handle;

use vitrine_core::SlideId;

/// Decoded-image handles for the slides whose files exist.
#[derive(Debug, Clone, Default)]
pub struct SlideImages {
    handles: HashMap<SlideId, Handle>,
}

impl SlideImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SlideId, handle: Handle) {
        self.handles.insert(id, handle);
    }

    pub fn get(&self, id: SlideId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
