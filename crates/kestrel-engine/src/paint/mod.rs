//! Paint model shared between the UI layer and the renderer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke style ([`Pen`]) and fill style ([`Brush`])
//!
//! Geometry types remain in `coords`.

pub mod brush;
pub mod color;
pub mod pen;

pub use brush::{Brush, DrawableHandle};
pub use color::Color;
pub use pen::Pen;
