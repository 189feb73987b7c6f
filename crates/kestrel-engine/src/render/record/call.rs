use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, DrawableHandle};
use crate::render::backend::{Projection, ShapeType};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    SpriteBegin,
    SpriteEnd,
    SpriteColor(Color),
    SpriteDraw { drawable: DrawableHandle, rect: Rect },
    SpriteTranslate(Vec2),
    SpriteProjection(Projection),

    ShapeBegin(ShapeType),
    ShapeEnd,
    ShapeColor(Color),
    Line { from: Vec2, to: Vec2 },
    ShapeRect(Rect),
    ShapeTranslate(Vec2),
    ShapeProjection(Projection),

    Text { text: String, position: Vec2, color: Color },
}

impl BackendCall {
    /// `true` for calls that open or close a batch.
    #[inline]
    pub fn is_batch_boundary(&self) -> bool {
        matches!(
            self,
            BackendCall::SpriteBegin
                | BackendCall::SpriteEnd
                | BackendCall::ShapeBegin(_)
                | BackendCall::ShapeEnd
        )
    }
}

/// Shared, append-only call log.
///
/// Cloning yields another handle to the same log. Single-threaded by
/// construction, like the renderer itself.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<BackendCall>>>,
}

impl CallLog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&self, call: BackendCall) {
        self.calls.borrow_mut().push(call);
    }

    /// Snapshot of everything recorded so far.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    /// Drains the log, returning what was recorded.
    pub fn take(&self) -> Vec<BackendCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    #[inline]
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}
