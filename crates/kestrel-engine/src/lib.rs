//! Kestrel engine crate.
//!
//! Geometry, paint styles and the render-mode coordinator that turns UI
//! draw calls into batches on a 2D backend.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
