use std::collections::HashMap;

use crate::paint::DrawableHandle;
use crate::render::backend::Skin;

/// [`Skin`] backed by a map from asset id to drawable handle.
#[derive(Debug, Clone, Default)]
pub struct MapSkin {
    drawables: HashMap<String, DrawableHandle>,
}

impl MapSkin {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, drawable: DrawableHandle) -> Option<DrawableHandle> {
        self.drawables.insert(id.into(), drawable)
    }

    pub fn with(mut self, id: impl Into<String>, drawable: DrawableHandle) -> Self {
        self.insert(id, drawable);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

impl Skin for MapSkin {
    fn drawable(&self, id: &str) -> Option<DrawableHandle> {
        self.drawables.get(id).copied()
    }
}
