use crate::coords::Rect;
use crate::render::backend::ClipStack;

/// Scissor stack in backend space.
///
/// Each pushed rect is intersected with its parent, so the top is always the
/// effective region. A push whose effective region would be empty is
/// rejected and leaves the stack unchanged.
#[derive(Debug, Clone, Default)]
pub struct ScissorStack {
    stack: Vec<Rect>,
}

impl ScissorStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective scissor region, `None` when nothing is clipped.
    #[inline]
    pub fn current(&self) -> Option<Rect> {
        self.stack.last().copied()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl ClipStack for ScissorStack {
    fn push(&mut self, rect: Rect) -> bool {
        let rect = rect.normalized();
        let effective = match self.stack.last() {
            None => Some(rect).filter(|r| !r.is_empty()),
            Some(&parent) => parent.intersect(rect),
        };

        match effective {
            Some(r) => {
                self.stack.push(r);
                true
            }
            None => false,
        }
    }

    fn pop(&mut self) -> Option<Rect> {
        self.stack.pop()
    }
}
