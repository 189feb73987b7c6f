//! Collaborator contracts consumed by [`Renderer`](super::Renderer).
//!
//! A graphics backend provides a textured-quad batcher, a primitive batcher
//! and a clip-region stack. Theme assets and font drawing are reached through
//! [`Skin`] and [`Font`]. All coordinates handed to these traits are already
//! in backend space (bottom-left origin, translation applied by the
//! backend's own transform).

use crate::coords::Rect;
use crate::paint::{Color, DrawableHandle};

/// Primitive type a [`ShapeBatcher`] batch is opened with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeType {
    /// Outlines and line segments.
    Line,
    /// Solid filled primitives.
    Filled,
}

/// Orthographic 2D projection over `[left, left + width] × [bottom, bottom + height]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Projection {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Projection {
    #[inline]
    pub const fn ortho_2d(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self { left, bottom, width, height }
    }
}

/// Textured-quad batcher (sprites, drawables, glyph quads).
pub trait SpriteBatcher {
    /// Opens a batch. Calls are only valid between `begin` and `end`.
    fn begin(&mut self);

    /// Submits everything recorded since `begin`.
    fn end(&mut self);

    /// Tint applied to subsequent draws.
    fn set_color(&mut self, color: Color);

    /// Draws `drawable` stretched over `(x, y, w, h)`.
    fn draw(&mut self, drawable: DrawableHandle, x: f32, y: f32, w: f32, h: f32);

    /// Post-multiplies the transform matrix with a translation.
    fn translate(&mut self, dx: f32, dy: f32);

    fn set_projection(&mut self, projection: Projection);
}

/// Immediate-style primitive batcher (lines, rectangles).
pub trait ShapeBatcher {
    fn begin(&mut self, shape_type: ShapeType);

    fn end(&mut self);

    fn set_color(&mut self, color: Color);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn translate(&mut self, dx: f32, dy: f32);

    fn set_projection(&mut self, projection: Projection);
}

/// Stack of scissor rectangles in backend space.
pub trait ClipStack {
    /// Pushes `rect`. Returns `false` (and keeps the stack unchanged) when the
    /// backend rejects it, typically because the effective region is empty.
    fn push(&mut self, rect: Rect) -> bool;

    /// Pops the most recent region. `None` if the stack is empty.
    fn pop(&mut self) -> Option<Rect>;
}

/// Theme asset lookup.
pub trait Skin {
    fn drawable(&self, id: &str) -> Option<DrawableHandle>;
}

/// A font with a mutable current color.
///
/// Glyph rasterization happens behind this trait; the renderer only decides
/// the color and the baseline position.
pub trait Font {
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    fn draw(&mut self, sprites: &mut dyn SpriteBatcher, text: &str, x: f32, y: f32);
}
