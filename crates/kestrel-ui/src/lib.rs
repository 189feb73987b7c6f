//! Kestrel UI — layout glue on top of `kestrel-engine`.
//!
//! - [`size_policy`]: resolves absolute + proportional size requests
//! - [`layout`]: splits a rect into cells using a size policy
//! - [`alignment`]: nine-point content anchors
//! - [`model`]: value models edited by components

pub mod alignment;
pub mod layout;
pub mod model;
pub mod size_policy;

/// Common imports for layout and painting code.
pub mod prelude {
    pub use crate::alignment::{Alignment, Horizontal, Vertical};
    pub use crate::layout::{split, Axis};
    pub use crate::model::{EmptyModel, Model, ValueModel};
    pub use crate::size_policy::{SizePolicyModel, UnifiedSize};

    pub use kestrel_engine::coords::{Rect, Vec2};
    pub use kestrel_engine::paint::{Brush, Color, DrawableHandle, Pen};
    pub use kestrel_engine::render::{Renderer, RendererConfig};
}
