//! Render-mode coordination.
//!
//! [`Renderer`] turns UI draw calls (text, lines, outlines, fills, rounded
//! rects, clip regions) into batches on a 2D backend described by the traits
//! in [`backend`].
//!
//! Convention:
//! - Callers use UI space: logical pixels, top-left origin, +Y down.
//! - Backends receive bottom-left-origin coordinates (`viewport.height - y`).

pub mod backend;
mod config;
mod mode;
pub mod record;
mod renderer;
mod state;

pub use backend::{ClipStack, Font, Projection, ShapeBatcher, ShapeType, Skin, SpriteBatcher};
pub use config::{RendererConfig, DEFAULT_ROUNDED_RECT_PREFIX};
pub use mode::RenderMode;
pub use renderer::{rounded_rect_bucket, Renderer};
pub use state::{OpacityGuard, PaintState};
