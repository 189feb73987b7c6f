//! Coordinate and geometry types shared by the renderer and the UI layer.
//!
//! Canonical UI space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The renderer flips Y against the viewport height before handing
//! coordinates to a backend (bottom-left origin).

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
