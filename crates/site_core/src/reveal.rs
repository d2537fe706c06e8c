use std::collections::{BTreeMap, BTreeSet};

use crate::{ElementId, LazyImageLayout, Placement};

/// Scroll-reveal targets and lazily loaded images.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealState {
    targets: Vec<Placement>,
    revealed: BTreeSet<ElementId>,
    images: BTreeMap<ElementId, LazyImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LazyImage {
    data_src: String,
    loaded: bool,
}

impl RevealState {
    pub fn register(&mut self, targets: &[Placement], images: &[LazyImageLayout]) {
        self.targets = targets.to_vec();
        self.images = images
            .iter()
            .map(|image| {
                (
                    image.id.clone(),
                    LazyImage {
                        data_src: image.data_src.clone(),
                        loaded: false,
                    },
                )
            })
            .collect();
    }

    /// Reveals a registered target; reveals are permanent.
    pub fn reveal(&mut self, id: &str) -> bool {
        if !self.targets.iter().any(|target| target.id == id) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    /// Reveals every target whose top edge is above the fold.
    pub fn reveal_above(&mut self, viewport_height: f64) -> bool {
        let mut changed = false;
        for target in &self.targets {
            if target.top < viewport_height {
                changed |= self.revealed.insert(target.id.clone());
            }
        }
        changed
    }

    /// Swaps in the real image source. Returns false if the image is unknown
    /// or already loaded.
    pub fn load_image(&mut self, id: &str) -> bool {
        match self.images.get_mut(id) {
            Some(image) if !image.loaded => {
                image.loaded = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed(&self) -> impl Iterator<Item = &ElementId> {
        self.revealed.iter()
    }

    pub fn loaded_images(&self) -> impl Iterator<Item = (&ElementId, &str)> {
        self.images
            .iter()
            .filter(|(_, image)| image.loaded)
            .map(|(id, image)| (id, image.data_src.as_str()))
    }
}
