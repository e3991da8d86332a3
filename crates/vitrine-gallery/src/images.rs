//! Slide image resolution
//!
//! Resolves gallery image paths against the gallery directory and builds
//! the handle cache. A missing file hides that slide's visual but keeps
//! its caption; there is no retry and no substitute image.

use std::path::Path;

use iced::widget::image::Handle;

use vitrine_core::{Gallery, SlideId};
use vitrine_widgets::SlideImages;

/// Build the image cache for a gallery rooted at `dir`.
pub fn load_slide_images(gallery: &Gallery, dir: &Path) -> SlideImages {
    let mut images = SlideImages::new();

    for entry in &gallery.entries {
        let path = if entry.image.is_absolute() {
            entry.image.clone()
        } else {
            dir.join(&entry.image)
        };

        if path.is_file() {
            images.insert(SlideId(entry.id), Handle::from_path(path));
        } else {
            log::warn!(
                "Slide image missing, showing caption only: {:?} ({})",
                path,
                entry.title
            );
        }
    }

    log::info!(
        "Resolved {} of {} slide images from {:?}",
        images.len(),
        gallery.entries.len(),
        dir
    );

    images
}
