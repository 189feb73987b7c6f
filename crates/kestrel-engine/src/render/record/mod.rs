//! Headless backend that records every call the renderer makes.
//!
//! Useful for tests, demos and for replaying a frame into a real backend:
//! the sprite batcher, shape batcher and font all append to one shared
//! [`CallLog`], so the log reflects the exact submission order.

mod call;
mod font;
mod scissor;
mod shapes;
mod skin;
mod sprites;

pub use call::{BackendCall, CallLog};
pub use font::RecordingFont;
pub use scissor::ScissorStack;
pub use shapes::RecordingShapes;
pub use skin::MapSkin;
pub use sprites::RecordingSprites;

use super::{Renderer, RendererConfig};

/// Renderer wired to the recording backend.
pub type RecordingRenderer = Renderer<RecordingSprites, RecordingShapes, ScissorStack>;

/// Builds a [`RecordingRenderer`] with a [`RecordingFont`] installed.
///
/// Returns the renderer and a handle to the shared call log.
pub fn recording_renderer(config: RendererConfig) -> (RecordingRenderer, CallLog) {
    let log = CallLog::new();
    let mut renderer = Renderer::with_config(
        RecordingSprites::new(log.clone()),
        RecordingShapes::new(log.clone()),
        ScissorStack::new(),
        config,
    );
    renderer.set_font(RecordingFont::new(log.clone()));
    (renderer, log)
}
