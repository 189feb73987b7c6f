use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::backend::{Projection, ShapeBatcher, ShapeType};

use super::{BackendCall, CallLog};

/// [`ShapeBatcher`] that records into a [`CallLog`].
#[derive(Debug)]
pub struct RecordingShapes {
    log: CallLog,
    open: Option<ShapeType>,
    color: Color,
    transform: Vec2,
    projection: Projection,
}

impl RecordingShapes {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            open: None,
            color: Color::WHITE,
            transform: Vec2::zero(),
            projection: Projection::default(),
        }
    }

    /// Shape type of the open batch, if any.
    #[inline]
    pub fn open_batch(&self) -> Option<ShapeType> {
        self.open
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn transform(&self) -> Vec2 {
        self.transform
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }
}

impl ShapeBatcher for RecordingShapes {
    fn begin(&mut self, shape_type: ShapeType) {
        debug_assert!(self.open.is_none(), "shape batch begun twice");
        self.open = Some(shape_type);
        self.log.record(BackendCall::ShapeBegin(shape_type));
    }

    fn end(&mut self) {
        debug_assert!(self.open.is_some(), "shape batch ended without begin");
        self.open = None;
        self.log.record(BackendCall::ShapeEnd);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.log.record(BackendCall::ShapeColor(color));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        debug_assert_eq!(self.open, Some(ShapeType::Line), "line outside a line batch");
        self.log.record(BackendCall::Line { from: Vec2::new(x1, y1), to: Vec2::new(x2, y2) });
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        debug_assert!(self.open.is_some(), "rect outside begin/end");
        self.log.record(BackendCall::ShapeRect(Rect::new(x, y, w, h)));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform += Vec2::new(dx, dy);
        self.log.record(BackendCall::ShapeTranslate(Vec2::new(dx, dy)));
    }

    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.log.record(BackendCall::ShapeProjection(projection));
    }
}
