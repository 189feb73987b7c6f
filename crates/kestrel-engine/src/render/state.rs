use core::ops::{Deref, DerefMut};

use crate::paint::{Brush, Pen};

use super::backend::{ClipStack, ShapeBatcher, SpriteBatcher};
use super::Renderer;

/// Style state saved by [`Renderer::push_state`].
///
/// Translation is not part of the snapshot: it is undone explicitly or at
/// frame end.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintState {
    pub pen: Pen,
    pub brush: Brush,
    pub opacity: f32,
}

/// Scoped opacity override returned by [`Renderer::with_opacity`].
///
/// Derefs to the renderer so drawing goes through the guard; the previous
/// opacity is restored when the guard is dropped.
pub struct OpacityGuard<'r, S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    renderer: &'r mut Renderer<S, P, C>,
    previous: f32,
}

impl<'r, S, P, C> OpacityGuard<'r, S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    pub(super) fn new(renderer: &'r mut Renderer<S, P, C>, opacity: f32) -> Self {
        let previous = renderer.set_opacity(opacity);
        Self { renderer, previous }
    }

    /// Opacity that will be restored on drop.
    #[inline]
    pub fn previous(&self) -> f32 {
        self.previous
    }
}

impl<S, P, C> Deref for OpacityGuard<'_, S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    type Target = Renderer<S, P, C>;

    fn deref(&self) -> &Self::Target {
        self.renderer
    }
}

impl<S, P, C> DerefMut for OpacityGuard<'_, S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.renderer
    }
}

impl<S, P, C> Drop for OpacityGuard<'_, S, P, C>
where
    S: SpriteBatcher,
    P: ShapeBatcher,
    C: ClipStack,
{
    fn drop(&mut self) {
        self.renderer.set_opacity(self.previous);
    }
}
