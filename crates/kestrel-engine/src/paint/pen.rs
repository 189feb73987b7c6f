use super::Color;

/// Stroke style for lines, outlines and text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pen {
    pub width: f32,
    pub color: Color,
}

impl Pen {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

impl Default for Pen {
    /// One pixel wide, black.
    fn default() -> Self {
        Self::new(1.0, Color::BLACK)
    }
}
