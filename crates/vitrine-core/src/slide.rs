//! Slide data model shared by every carousel widget
//!
//! A slide is one displayable unit: a title, a description, and a visual
//! that is either an image file or a two-stop color swatch. Widgets never
//! observe an empty list; `SlideSet` enforces the non-empty invariant at
//! construction so circular index arithmetic is total.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::gallery::GalleryError;

/// Stable identity for a slide.
///
/// Used as the image-cache key and for list identity across display-mode
/// switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlideId(pub u64);

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slide-{}", self.0)
    }
}

/// Two-stop gradient for the swatch display mode.
///
/// Colors are hex strings (e.g., "#EF4444"); parsing to a renderer color
/// happens in the UI layer so the core stays renderer-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchStyle {
    pub start: String,
    pub end: String,
}

/// The visual half of a slide.
///
/// A rendered list is uniform in variant; uniformity holds by construction
/// because both variants project from the same gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// Image file on disk, resolved against the gallery directory.
    Image { path: PathBuf },
    /// Color swatch rendered as a linear gradient.
    Swatch { style: SwatchStyle },
}

/// One displayable unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideItem {
    pub id: SlideId,
    pub title: String,
    pub description: String,
    pub visual: Visual,
}

/// Which visual variant the gallery projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Images,
    Swatches,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Images => Self::Swatches,
            Self::Swatches => Self::Images,
        }
    }

    /// Human-readable mode name for the header caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "Image Version",
            Self::Swatches => "Color Version",
        }
    }
}

/// Ordered, non-empty list of slides.
///
/// Navigation arithmetic divides by the slide count, so emptiness is
/// rejected once here instead of being re-checked in every widget.
#[derive(Debug, Clone)]
pub struct SlideSet {
    items: Vec<SlideItem>,
}

#[allow(clippy::len_without_is_empty)]
impl SlideSet {
    /// Wrap a list of slides; rejects an empty list.
    pub fn new(items: Vec<SlideItem>) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        Ok(Self { items })
    }

    /// Number of slides; always >= 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&SlideItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> SlideItem {
        SlideItem {
            id: SlideId(id),
            title: format!("Slide {id}"),
            description: String::new(),
            visual: Visual::Swatch {
                style: SwatchStyle {
                    start: "#000000".to_string(),
                    end: "#FFFFFF".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_slide_set_rejects_empty() {
        assert!(SlideSet::new(Vec::new()).is_err());
    }

    #[test]
    fn test_slide_set_preserves_order() {
        let set = SlideSet::new(vec![item(3), item(1), item(2)]).unwrap();
        assert_eq!(set.len(), 3);
        let ids: Vec<u64> = set.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::Images.toggle(), DisplayMode::Swatches);
        assert_eq!(DisplayMode::Swatches.toggle(), DisplayMode::Images);
        assert_eq!(DisplayMode::Images.toggle().toggle(), DisplayMode::Images);
    }

    #[test]
    fn test_display_mode_yaml() {
        let yaml = serde_yaml::to_string(&DisplayMode::Swatches).unwrap();
        assert_eq!(yaml.trim(), "swatches");
        let parsed: DisplayMode = serde_yaml::from_str("images").unwrap();
        assert_eq!(parsed, DisplayMode::Images);
    }
}
