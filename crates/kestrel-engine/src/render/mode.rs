use super::backend::ShapeType;

/// Which backend batching context is currently open.
///
/// Exactly one mode is current at any time; [`Idle`](RenderMode::Idle) means
/// no batch is open.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Idle,
    SpriteBatch,
    ShapeOutline,
    ShapeFilled,
}

impl RenderMode {
    #[inline]
    pub const fn for_shape(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Line => RenderMode::ShapeOutline,
            ShapeType::Filled => RenderMode::ShapeFilled,
        }
    }

    #[inline]
    pub const fn is_idle(self) -> bool {
        matches!(self, RenderMode::Idle)
    }
}
