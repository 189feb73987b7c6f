use crate::coords::{Rect, Vec2};
use crate::paint::{Color, DrawableHandle};
use crate::render::backend::{Projection, SpriteBatcher};

use super::{BackendCall, CallLog};

/// [`SpriteBatcher`] that records into a [`CallLog`].
#[derive(Debug)]
pub struct RecordingSprites {
    log: CallLog,
    drawing: bool,
    color: Color,
    transform: Vec2,
    projection: Projection,
}

impl RecordingSprites {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            drawing: false,
            color: Color::WHITE,
            transform: Vec2::zero(),
            projection: Projection::default(),
        }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Translation accumulated in the transform matrix (backend space).
    #[inline]
    pub fn transform(&self) -> Vec2 {
        self.transform
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }
}

impl SpriteBatcher for RecordingSprites {
    fn begin(&mut self) {
        debug_assert!(!self.drawing, "sprite batch begun twice");
        self.drawing = true;
        self.log.record(BackendCall::SpriteBegin);
    }

    fn end(&mut self) {
        debug_assert!(self.drawing, "sprite batch ended without begin");
        self.drawing = false;
        self.log.record(BackendCall::SpriteEnd);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.log.record(BackendCall::SpriteColor(color));
    }

    fn draw(&mut self, drawable: DrawableHandle, x: f32, y: f32, w: f32, h: f32) {
        debug_assert!(self.drawing, "sprite drawn outside begin/end");
        self.log.record(BackendCall::SpriteDraw { drawable, rect: Rect::new(x, y, w, h) });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform += Vec2::new(dx, dy);
        self.log.record(BackendCall::SpriteTranslate(Vec2::new(dx, dy)));
    }

    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.log.record(BackendCall::SpriteProjection(projection));
    }
}
