use crate::paint::{Brush, Pen};

/// Asset id prefix for the pre-baked rounded-rectangle drawables.
pub const DEFAULT_ROUNDED_RECT_PREFIX: &str = "rounded_rect_";

/// Initial state of a [`Renderer`](super::Renderer).
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub pen: Pen,
    pub brush: Brush,
    /// Clamped to `[0, 1]` on construction; NaN counts as 0.
    pub opacity: f32,
    /// Rounded-rect drawables are looked up as `<prefix><bucket>`.
    pub rounded_rect_prefix: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            pen: Pen::default(),
            brush: Brush::default(),
            opacity: 1.0,
            rounded_rect_prefix: DEFAULT_ROUNDED_RECT_PREFIX.to_owned(),
        }
    }
}
