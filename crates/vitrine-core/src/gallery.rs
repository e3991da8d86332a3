//! Gallery source: the built-in demo gallery and the on-disk manifest
//!
//! A gallery entry carries both visual representations (image path and
//! swatch gradient); per-mode slide lists are projected from the same
//! entries, so the two modes always agree on count and order.
//!
//! The manifest is YAML in the gallery directory (`gallery.yaml`); a
//! missing or invalid manifest falls back to the built-in demo gallery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slide::{DisplayMode, SlideId, SlideItem, SlideSet, SwatchStyle, Visual};

/// Manifest file name inside the gallery directory.
pub const MANIFEST_NAME: &str = "gallery.yaml";

/// Errors produced while assembling a slide set.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The gallery produced no entries; widgets are never mounted empty.
    #[error("gallery contains no entries")]
    EmptyGallery,
}

/// One gallery entry: caption text plus both visual representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Image file, relative to the gallery directory (or absolute).
    pub image: PathBuf,
    /// Gradient stops for the swatch mode.
    pub swatch: SwatchStyle,
}

/// Ordered collection of gallery entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    pub entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Project the slide list for one display mode.
    ///
    /// Both projections share ids, titles, descriptions, length, and order;
    /// only the visual variant differs.
    pub fn slides(&self, mode: DisplayMode) -> Result<SlideSet, GalleryError> {
        let items = self
            .entries
            .iter()
            .map(|entry| SlideItem {
                id: SlideId(entry.id),
                title: entry.title.clone(),
                description: entry.description.clone(),
                visual: match mode {
                    DisplayMode::Images => Visual::Image {
                        path: entry.image.clone(),
                    },
                    DisplayMode::Swatches => Visual::Swatch {
                        style: entry.swatch.clone(),
                    },
                },
            })
            .collect();

        SlideSet::new(items)
    }

    /// The built-in five-slide demo gallery.
    pub fn builtin() -> Self {
        fn entry(
            id: u64,
            title: &str,
            description: &str,
            image: &str,
            start: &str,
            end: &str,
        ) -> GalleryEntry {
            GalleryEntry {
                id,
                title: title.to_string(),
                description: description.to_string(),
                image: PathBuf::from(image),
                swatch: SwatchStyle {
                    start: start.to_string(),
                    end: end.to_string(),
                },
            }
        }

        Self {
            entries: vec![
                entry(
                    1,
                    "Luxury Sports Car",
                    "High-performance vehicle with sleek design",
                    "sports-car.jpg",
                    "#EF4444",
                    "#EC4899",
                ),
                entry(
                    2,
                    "Electric SUV",
                    "Eco-friendly and spacious family vehicle",
                    "electric-suv.jpg",
                    "#3B82F6",
                    "#14B8A6",
                ),
                entry(
                    3,
                    "Classic Convertible",
                    "Timeless design with modern features",
                    "convertible.jpg",
                    "#22C55E",
                    "#10B981",
                ),
                entry(
                    4,
                    "Modern Sedan",
                    "Efficient and comfortable daily driver",
                    "sedan.jpg",
                    "#A855F7",
                    "#6366F1",
                ),
                entry(
                    5,
                    "Adventure Off-roader",
                    "Built for rugged terrain and exploration",
                    "offroader.jpg",
                    "#F97316",
                    "#EF4444",
                ),
            ],
        }
    }

    /// Load `gallery.yaml` from the gallery directory.
    ///
    /// If the manifest doesn't exist, returns the built-in gallery.
    /// If it exists but is invalid or empty, logs a warning and returns the
    /// built-in gallery.
    pub fn load(dir: &Path) -> Self {
        let manifest = dir.join(MANIFEST_NAME);

        if !manifest.exists() {
            log::info!(
                "load_gallery: No manifest at {:?}, using built-in gallery",
                manifest
            );
            return Self::builtin();
        }

        match std::fs::read_to_string(&manifest) {
            Ok(contents) => match serde_yaml::from_str::<Gallery>(&contents) {
                Ok(gallery) if !gallery.entries.is_empty() => {
                    log::info!(
                        "load_gallery: Loaded {} entries from {:?}",
                        gallery.entries.len(),
                        manifest
                    );
                    gallery
                }
                Ok(_) => {
                    log::warn!("load_gallery: Manifest has no entries, using built-in gallery");
                    Self::builtin()
                }
                Err(e) => {
                    log::warn!(
                        "load_gallery: Failed to parse manifest: {}, using built-in gallery",
                        e
                    );
                    Self::builtin()
                }
            },
            Err(e) => {
                log::warn!(
                    "load_gallery: Failed to read manifest: {}, using built-in gallery",
                    e
                );
                Self::builtin()
            }
        }
    }
}

/// Default gallery directory: ~/Pictures/vitrine-gallery
pub fn default_gallery_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitrine-gallery")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_gallery() {
        let gallery = Gallery::builtin();
        assert_eq!(gallery.entries.len(), 5);
        assert_eq!(gallery.entries[0].title, "Luxury Sports Car");
        assert_eq!(gallery.entries[4].swatch.end, "#EF4444");
    }

    #[test]
    fn test_projection_parity() {
        let gallery = Gallery::builtin();
        let images = gallery.slides(DisplayMode::Images).unwrap();
        let swatches = gallery.slides(DisplayMode::Swatches).unwrap();

        assert_eq!(images.len(), swatches.len());
        for (a, b) in images.iter().zip(swatches.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.description, b.description);
            assert!(matches!(a.visual, Visual::Image { .. }));
            assert!(matches!(b.visual, Visual::Swatch { .. }));
        }
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let gallery = Gallery {
            entries: Vec::new(),
        };
        assert!(matches!(
            gallery.slides(DisplayMode::Images),
            Err(GalleryError::EmptyGallery)
        ));
    }

    #[test]
    fn test_manifest_yaml_roundtrip() {
        let gallery = Gallery::builtin();
        let yaml = serde_yaml::to_string(&gallery).unwrap();
        let parsed: Gallery = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, gallery);
    }
}
