use super::Color;

/// Backend-opaque handle to a drawable (nine-patch, texture region, ...).
///
/// The renderer never looks inside; it only forwards the handle to the
/// sprite batcher that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DrawableHandle(pub u32);

impl DrawableHandle {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Fill style for rectangles.
///
/// The two variants composite differently: a solid color is faded by the
/// renderer's opacity, a drawable only by its own `opacity`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    Drawable {
        drawable: DrawableHandle,
        opacity: f32,
    },
}

impl Brush {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    #[inline]
    pub fn drawable(drawable: DrawableHandle, opacity: f32) -> Self {
        Brush::Drawable { drawable, opacity }
    }

    /// Opacity carried by the brush itself.
    ///
    /// For a solid brush this is the color's alpha.
    #[inline]
    pub fn opacity(&self) -> f32 {
        match self {
            Brush::Solid(c) => c.a,
            Brush::Drawable { opacity, .. } => *opacity,
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(Color::TRANSPARENT)
    }
}

impl From<Color> for Brush {
    #[inline]
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}
