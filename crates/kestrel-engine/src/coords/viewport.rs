/// Viewport extent in backend pixels.
///
/// The height is the reference for the Y flip: `flipped_y = height - y`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Converts a top-left-origin Y coordinate to the backend's bottom-left origin.
    #[inline]
    pub fn flip_y(self, y: f32) -> f32 {
        self.height - y
    }
}
