use kestrel_engine::coords::Rect;

use crate::size_policy::SizePolicyModel;

/// Direction along which a container stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    #[inline]
    pub fn extent(self, rect: Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.width(),
            Axis::Vertical => rect.height(),
        }
    }
}

/// Splits `rect` along `axis` into one cell per size request.
///
/// Cells are laid out back to back starting at the rect's origin and keep
/// the full cross-axis extent. `spacing` is removed from the available space
/// before sizes are resolved.
pub fn split(rect: Rect, axis: Axis, policy: &SizePolicyModel, spacing: f32) -> Vec<Rect> {
    let gaps = spacing * policy.len().saturating_sub(1) as f32;
    let available = (axis.extent(rect) - gaps).max(0.0);

    let mut cursor = 0.0;
    policy
        .sizes(available)
        .into_iter()
        .map(|size| {
            let cell = match axis {
                Axis::Horizontal => Rect::new(rect.x() + cursor, rect.y(), size, rect.height()),
                Axis::Vertical => Rect::new(rect.x(), rect.y() + cursor, rect.width(), size),
            };
            cursor += size + spacing;
            cell
        })
        .collect()
}
