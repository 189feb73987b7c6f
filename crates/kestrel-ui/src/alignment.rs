use kestrel_engine::coords::{Rect, Vec2};

/// Vertical component of an [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Top,
    Middle,
    Bottom,
}

/// Horizontal component of an [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

/// Anchor of content inside a container (labels in buttons, icons in cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        use Horizontal::*;
        use Vertical::*;
        match (vertical, horizontal) {
            (Top, Left) => Alignment::TopLeft,
            (Top, Center) => Alignment::TopCenter,
            (Top, Right) => Alignment::TopRight,
            (Middle, Left) => Alignment::MiddleLeft,
            (Middle, Center) => Alignment::MiddleCenter,
            (Middle, Right) => Alignment::MiddleRight,
            (Bottom, Left) => Alignment::BottomLeft,
            (Bottom, Center) => Alignment::BottomCenter,
            (Bottom, Right) => Alignment::BottomRight,
        }
    }

    pub const fn vertical(self) -> Vertical {
        match self {
            Alignment::TopLeft | Alignment::TopCenter | Alignment::TopRight => Vertical::Top,
            Alignment::MiddleLeft | Alignment::MiddleCenter | Alignment::MiddleRight => Vertical::Middle,
            Alignment::BottomLeft | Alignment::BottomCenter | Alignment::BottomRight => Vertical::Bottom,
        }
    }

    pub const fn horizontal(self) -> Horizontal {
        match self {
            Alignment::TopLeft | Alignment::MiddleLeft | Alignment::BottomLeft => Horizontal::Left,
            Alignment::TopCenter | Alignment::MiddleCenter | Alignment::BottomCenter => Horizontal::Center,
            Alignment::TopRight | Alignment::MiddleRight | Alignment::BottomRight => Horizontal::Right,
        }
    }

    /// Top-left position of `content` placed inside `container`.
    ///
    /// Content larger than the container overflows on the far side for
    /// start alignment and on both sides when centered.
    pub fn place(self, container: Rect, content: Vec2) -> Vec2 {
        let free_x = container.width() - content.x;
        let free_y = container.height() - content.y;

        let x = match self.horizontal() {
            Horizontal::Left => 0.0,
            Horizontal::Center => free_x * 0.5,
            Horizontal::Right => free_x,
        };
        let y = match self.vertical() {
            Vertical::Top => 0.0,
            Vertical::Middle => free_y * 0.5,
            Vertical::Bottom => free_y,
        };

        container.origin + Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Alignment; 9] = [
        Alignment::TopLeft,
        Alignment::TopCenter,
        Alignment::TopRight,
        Alignment::MiddleLeft,
        Alignment::MiddleCenter,
        Alignment::MiddleRight,
        Alignment::BottomLeft,
        Alignment::BottomCenter,
        Alignment::BottomRight,
    ];

    #[test]
    fn components_round_trip_through_new() {
        for a in ALL {
            assert_eq!(Alignment::new(a.vertical(), a.horizontal()), a);
        }
    }

    #[test]
    fn middle_right_components() {
        assert_eq!(Alignment::MiddleRight.vertical(), Vertical::Middle);
        assert_eq!(Alignment::MiddleRight.horizontal(), Horizontal::Right);
    }

    #[test]
    fn place_centers_content() {
        let container = Rect::new(10.0, 20.0, 100.0, 40.0);
        let pos = Alignment::MiddleCenter.place(container, Vec2::new(20.0, 10.0));
        assert_eq!(pos, Vec2::new(50.0, 35.0));
    }

    #[test]
    fn place_bottom_right_touches_far_edges() {
        let container = Rect::new(0.0, 0.0, 100.0, 40.0);
        let pos = Alignment::BottomRight.place(container, Vec2::new(20.0, 10.0));
        assert_eq!(pos, Vec2::new(80.0, 30.0));
    }

    #[test]
    fn place_top_left_is_container_origin() {
        let container = Rect::new(5.0, 6.0, 50.0, 50.0);
        assert_eq!(Alignment::TopLeft.place(container, Vec2::new(70.0, 70.0)), Vec2::new(5.0, 6.0));
    }
}
